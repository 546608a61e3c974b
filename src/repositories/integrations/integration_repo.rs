//! System Integration Repository Implementation
//!
//! `system_integrations` 컬렉션을 다루는 MongoDB 리포지토리입니다.
//! 로그인 요청마다 범용 OAuth2 설정을 읽으므로 Redis에 짧게 캐시하고,
//! 관리자가 설정을 저장하면 즉시 무효화합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use singleton_macro::repository;
use log::{debug, warn};

use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::integrations::{IntegrationClassify, SystemIntegration},
    repositories::integrations::IntegrationStore,
};
use crate::errors::errors::AppError;

/// 연동 설정 캐시 TTL (초)
const INTEGRATION_CACHE_TTL: usize = 60;

#[repository(name = "integration", collection = "system_integrations")]
pub struct IntegrationRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl IntegrationRepository {
    /// 분류별 캐시 키: `integration_repository:{classify}`
    fn classify_cache_key(&self, classify: IntegrationClassify) -> String {
        self.cache_key(classify.as_str())
    }

    /// 분류로 연동 행 조회 (캐시 우선)
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `integration_repository:oauth2`
    /// - **TTL**: 60초
    /// - 캐시 오류는 무시하고 DB 조회로 진행합니다.
    pub async fn find_by_classify(&self, classify: IntegrationClassify) -> Result<Option<SystemIntegration>, AppError> {
        let cache_key = self.classify_cache_key(classify);

        if let Ok(Some(cached)) = self.redis.get::<SystemIntegration>(&cache_key).await {
            debug!("연동 설정 캐시 적중: {}", cache_key);
            return Ok(Some(cached));
        }

        let integration = self.collection::<SystemIntegration>()
            .find_one(doc! { "classify": classify.as_str() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref integration) = integration {
            let _ = self.redis
                .set_with_expiry(&cache_key, integration, INTEGRATION_CACHE_TTL)
                .await;
        }

        Ok(integration)
    }

    /// 분류 기준 upsert
    ///
    /// 저장 후 해당 분류의 캐시를 삭제합니다.
    pub async fn save(&self, integration: &SystemIntegration) -> Result<SystemIntegration, AppError> {
        let saved = self.collection::<SystemIntegration>()
            .find_one_and_replace(doc! { "classify": integration.classify.as_str() }, integration)
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("연동 설정 저장 결과가 비어 있습니다".to_string()))?;

        let invalidated = self.invalidate_cache(integration.classify.as_str())
            .await
            .map_err(|e| e.to_string());
        if let Err(e) = invalidated {
            warn!("⚠️ 연동 설정 캐시 무효화 실패: {}", e);
        }

        Ok(saved)
    }
}

#[async_trait]
impl IntegrationStore for IntegrationRepository {
    async fn find_by_classify(&self, classify: IntegrationClassify) -> Result<Option<SystemIntegration>, AppError> {
        IntegrationRepository::find_by_classify(self, classify).await
    }

    async fn save(&self, integration: &SystemIntegration) -> Result<SystemIntegration, AppError> {
        IntegrationRepository::save(self, integration).await
    }
}
