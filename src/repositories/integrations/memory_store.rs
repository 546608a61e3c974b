//! 테스트용 메모리 저장소

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::integrations::{IntegrationClassify, SystemIntegration};
use crate::errors::errors::AppError;
use crate::repositories::integrations::IntegrationStore;

#[derive(Default)]
pub struct MemoryIntegrationStore {
    rows: Mutex<HashMap<IntegrationClassify, SystemIntegration>>,
}

impl MemoryIntegrationStore {
    pub fn with(integration: SystemIntegration) -> Self {
        let store = Self::default();
        store.rows.lock().unwrap().insert(integration.classify, integration);
        store
    }

    pub fn get(&self, classify: IntegrationClassify) -> Option<SystemIntegration> {
        self.rows.lock().unwrap().get(&classify).cloned()
    }
}

#[async_trait]
impl IntegrationStore for MemoryIntegrationStore {
    async fn find_by_classify(&self, classify: IntegrationClassify) -> Result<Option<SystemIntegration>, AppError> {
        Ok(self.get(classify))
    }

    async fn save(&self, integration: &SystemIntegration) -> Result<SystemIntegration, AppError> {
        let mut saved = integration.clone();
        if saved.id.is_none() {
            saved.id = Some(ObjectId::new());
        }
        self.rows.lock().unwrap().insert(saved.classify, saved.clone());
        Ok(saved)
    }
}
