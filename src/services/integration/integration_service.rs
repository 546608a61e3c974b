//! # System Integration Service
//!
//! 관리자 API(`/admin/api/gaia/system/oauth2`)의 진입점입니다.
//! 실제 로직은 [`oauth2_admin`](super::oauth2_admin)에 있고,
//! 이 서비스는 주입된 저장소와 Redis, HTTP 클라이언트를 연결합니다.

use std::sync::Arc;
use log::warn;
use singleton_macro::service;

use crate::caching::redis::RedisClient;
use crate::config::{ConsoleConfig, HttpClientConfig};
use crate::domain::dto::integrations::{OAuth2ConfigRequest, OAuth2ConfigResponse, OAuth2ConfigView};
use crate::errors::errors::AppResult;
use crate::repositories::integrations::IntegrationRepository;
use crate::services::integration::oauth2_admin;
use crate::services::oauth::Base64SecretCodec;

/// 공개 API 호스트가 저장된 Redis 키
pub const API_HOST_KEY: &str = "api_host";

#[service]
pub struct IntegrationService {
    integration_repo: Arc<IntegrationRepository>,
    redis: Arc<RedisClient>,
}

impl IntegrationService {
    /// Redis `api_host`, 없으면 `CONSOLE_API_URL`
    pub async fn api_host(&self) -> String {
        match self.redis.get_string(API_HOST_KEY).await {
            Ok(Some(host)) if !host.trim().is_empty() => host,
            Ok(_) => ConsoleConfig::api_url(),
            Err(e) => {
                warn!("⚠️ api_host 조회 실패, 기본값 사용: {}", e);
                ConsoleConfig::api_url()
            }
        }
    }

    pub async fn get_oauth2_config(&self) -> AppResult<OAuth2ConfigResponse> {
        let host = self.api_host().await;
        oauth2_admin::get_oauth2_config(self.integration_repo.as_ref(), &Base64SecretCodec, host).await
    }

    pub async fn set_oauth2_config(&self, request: OAuth2ConfigRequest) -> AppResult<OAuth2ConfigView> {
        let http = HttpClientConfig::build_client();
        oauth2_admin::set_oauth2_config(
            self.integration_repo.as_ref(),
            &Base64SecretCodec,
            &http,
            &ConsoleConfig::api_url(),
            request,
        )
        .await
    }
}
