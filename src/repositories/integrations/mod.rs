//! 시스템 연동 설정 저장소

pub mod integration_repo;
#[cfg(test)]
pub mod memory_store;

use async_trait::async_trait;

use crate::domain::entities::integrations::{IntegrationClassify, SystemIntegration};
use crate::errors::errors::AppError;

pub use integration_repo::IntegrationRepository;

/// 연동 설정 행을 읽고 쓰는 저장소 인터페이스
///
/// 분류(`classify`)마다 한 행만 존재합니다.
#[async_trait]
pub trait IntegrationStore: Send + Sync {
    /// 분류로 연동 행을 조회합니다.
    async fn find_by_classify(&self, classify: IntegrationClassify) -> Result<Option<SystemIntegration>, AppError>;

    /// 분류 기준으로 행을 생성하거나 교체하고, 저장된 행을 반환합니다.
    async fn save(&self, integration: &SystemIntegration) -> Result<SystemIntegration, AppError>;
}
