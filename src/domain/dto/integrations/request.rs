//! OAuth2 통합 설정 변경 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::integrations::OAuth2IntegrationConfig;
use crate::utils::string_utils::deserialize_optional_string;

/// `POST /admin/api/gaia/system/oauth2`
///
/// `test == true`이면 연결 테스트만 수행하고 저장하지 않습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OAuth2ConfigRequest {
    /// 활성화 여부
    pub status: bool,

    #[validate(custom(function = "validate_http_url"))]
    #[validate(length(max = 2048, message = "server_url은 2048자를 넘을 수 없습니다"))]
    pub server_url: String,

    #[validate(length(max = 2048))]
    pub authorize_url: String,

    #[validate(length(max = 2048))]
    pub token_url: String,

    #[validate(length(max = 2048))]
    pub userinfo_url: String,

    #[validate(length(max = 2048))]
    pub logout_url: String,

    #[serde(deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_http_url"))]
    pub discovery_url: Option<String>,

    #[serde(deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 512))]
    pub scope: Option<String>,

    pub token_auth_method: String,

    #[serde(deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_http_url"))]
    pub redirect_uri: Option<String>,

    #[validate(length(max = 256))]
    pub app_id: String,

    /// 새 Client Secret 또는 조회 시 받은 마스킹된 값
    pub app_secret: String,

    #[validate(length(max = 256))]
    pub user_id_field: String,
    #[validate(length(max = 256))]
    pub user_name_field: String,
    #[validate(length(max = 256))]
    pub user_email_field: String,

    /// 연결 테스트만 수행
    pub test: bool,

    /// 연결 테스트에 사용할 authorization code
    pub code: String,
}

impl OAuth2ConfigRequest {
    /// 요청에서 저장할 설정 부분만 꺼냅니다.
    pub fn to_config(&self) -> OAuth2IntegrationConfig {
        OAuth2IntegrationConfig {
            server_url: self.server_url.trim().to_string(),
            authorize_url: self.authorize_url.trim().to_string(),
            token_url: self.token_url.trim().to_string(),
            userinfo_url: self.userinfo_url.trim().to_string(),
            logout_url: self.logout_url.trim().to_string(),
            discovery_url: self.discovery_url.clone(),
            scope: self.scope.clone(),
            token_auth_method: self.token_auth_method.trim().to_string(),
            redirect_uri: self.redirect_uri.clone(),
            user_id_field: self.user_id_field.trim().to_string(),
            user_name_field: self.user_name_field.trim().to_string(),
            user_email_field: self.user_email_field.trim().to_string(),
        }
    }
}

/// 비어 있거나 `http://` / `https://` 로 시작해야 합니다.
fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || value.starts_with("http://") || value.starts_with("https://") {
        return Ok(());
    }
    Err(ValidationError::new("invalid_url")
        .with_message("URL은 http:// 또는 https:// 로 시작해야 합니다".into()))
}
