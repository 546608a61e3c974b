//! System Integration Entity
//!
//! 관리자 화면에서 설정하는 외부 시스템 연동 정보입니다.
//! 분류(`classify`)별로 한 행만 존재하며, 현재는 범용 OAuth2 프로바이더(`oauth2`)만 사용합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::integrations::OAuth2IntegrationConfig;
use crate::errors::errors::AppError;

/// 연동 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationClassify {
    /// 범용 OAuth2/OIDC 로그인 프로바이더
    #[serde(rename = "oauth2")]
    OAuth2,
}

impl IntegrationClassify {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationClassify::OAuth2 => "oauth2",
        }
    }
}

/// 시스템 연동 엔티티 (`system_integrations` 컬렉션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemIntegration {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 연동 분류 (unique)
    pub classify: IntegrationClassify,
    /// 활성화 여부. 비활성화된 연동은 설정되지 않은 것으로 취급합니다.
    #[serde(default)]
    pub status: bool,
    /// OAuth Client ID
    #[serde(default)]
    pub app_id: String,
    /// 인코딩된 Client Secret (`SecretCodec` 으로 복호화)
    #[serde(default)]
    pub app_secret: String,
    /// 분류별 설정 JSON 문자열
    #[serde(default)]
    pub config: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl SystemIntegration {
    /// 비활성 상태의 빈 연동 행을 만듭니다.
    pub fn new_disabled(classify: IntegrationClassify) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            classify,
            status: false,
            app_id: String::new(),
            app_secret: String::new(),
            config: "{}".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 저장된 설정을 OAuth2 설정으로 해석합니다.
    pub fn oauth2_config(&self) -> Result<OAuth2IntegrationConfig, AppError> {
        OAuth2IntegrationConfig::from_json(&self.config)
            .map_err(|e| AppError::InternalError(format!("OAuth2 설정 파싱 실패: {}", e)))
    }

    pub fn set_oauth2_config(&mut self, config: &OAuth2IntegrationConfig) -> Result<(), AppError> {
        self.config = config
            .to_json()
            .map_err(|e| AppError::InternalError(format!("OAuth2 설정 직렬화 실패: {}", e)))?;
        Ok(())
    }

    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}
