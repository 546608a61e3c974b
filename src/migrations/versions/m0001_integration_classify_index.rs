use mongodb::bson::{doc, Document};

use crate::migrations::Migration;

/// 분류당 연동 행은 하나뿐입니다.
pub struct IntegrationClassifyIndex;

impl Migration for IntegrationClassifyIndex {
    fn version(&self) -> &'static str {
        "0001"
    }

    fn description(&self) -> &'static str {
        "unique index on system_integrations.classify"
    }

    fn commands(&self) -> Vec<Document> {
        vec![doc! {
            "createIndexes": "system_integrations",
            "indexes": [{
                "key": { "classify": 1 },
                "name": "uniq_classify",
                "unique": true,
            }],
        }]
    }
}
