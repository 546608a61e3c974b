use mongodb::bson::{doc, Document};

use crate::migrations::Migration;

pub struct IntegrationUpdatedAtIndex;

impl Migration for IntegrationUpdatedAtIndex {
    fn version(&self) -> &'static str {
        "0002"
    }

    fn description(&self) -> &'static str {
        "descending index on system_integrations.updated_at"
    }

    fn commands(&self) -> Vec<Document> {
        vec![doc! {
            "createIndexes": "system_integrations",
            "indexes": [{
                "key": { "updated_at": -1 },
                "name": "idx_updated_at_desc",
            }],
        }]
    }
}
