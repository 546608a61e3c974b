//! 범용 OAuth2/OIDC 프로바이더 설정
//!
//! `SystemIntegration.config` 컬럼에 JSON 문자열로 저장됩니다.
//!
//! ```json
//! {
//!   "server_url": "https://sso.example.com",
//!   "authorize_url": "/oauth/authorize",
//!   "token_url": "/oauth/token",
//!   "userinfo_url": "/oauth/userinfo",
//!   "token_auth_method": "client_secret_basic",
//!   "user_id_field": "data.id",
//!   "user_name_field": "data.name",
//!   "user_email_field": "data.emails.*.address"
//! }
//! ```

use serde::{Deserialize, Serialize};
use crate::domain::models::oauth::TokenAuthMethod;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuth2IntegrationConfig {
    /// 프로바이더 기본 주소
    pub server_url: String,
    /// 인가 엔드포인트 경로 또는 절대 URL
    pub authorize_url: String,
    /// 토큰 엔드포인트 경로 또는 절대 URL
    pub token_url: String,
    /// 사용자 정보 엔드포인트 경로 또는 절대 URL
    pub userinfo_url: String,
    pub logout_url: String,

    /// OIDC 디스커버리 주소. 설정되면 엔드포인트 경로보다 우선합니다.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_optional_string")]
    pub discovery_url: Option<String>,

    /// 인가 요청에 붙일 scope
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_optional_string")]
    pub scope: Option<String>,

    /// `client_secret_post` | `client_secret_basic`
    pub token_auth_method: String,

    /// 콜백 주소 재정의
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_optional_string")]
    pub redirect_uri: Option<String>,

    /// 사용자 정보 JSON에서 값을 꺼낼 필드 경로
    pub user_id_field: String,
    pub user_name_field: String,
    pub user_email_field: String,
}

impl OAuth2IntegrationConfig {
    /// 저장된 JSON 문자열을 해석합니다. 빈 문자열은 기본 설정입니다.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn auth_method(&self) -> TokenAuthMethod {
        TokenAuthMethod::parse(&self.token_auth_method)
    }

    /// 설정된 콜백 주소, 없으면 `default`
    pub fn redirect_uri_or(&self, default: impl FnOnce() -> String) -> String {
        self.redirect_uri.clone().unwrap_or_else(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_with_missing_fields_uses_defaults() {
        let config = OAuth2IntegrationConfig::from_json(r#"{"server_url": "https://sso.example.com"}"#).unwrap();

        assert_eq!(config.server_url, "https://sso.example.com");
        assert_eq!(config.token_url, "");
        assert_eq!(config.discovery_url, None);
        assert_eq!(config.auth_method(), TokenAuthMethod::ClientSecretPost);
    }

    #[test]
    fn test_from_json_blank_optional_fields_are_none() {
        let config = OAuth2IntegrationConfig::from_json(
            r#"{"discovery_url": "  ", "scope": "", "redirect_uri": null, "token_auth_method": " CLIENT_SECRET_BASIC"}"#,
        ).unwrap();

        assert_eq!(config.discovery_url, None);
        assert_eq!(config.scope, None);
        assert_eq!(config.redirect_uri, None);
        assert_eq!(config.auth_method(), TokenAuthMethod::ClientSecretBasic);
    }

    #[test]
    fn test_empty_json_string_is_default() {
        assert_eq!(OAuth2IntegrationConfig::from_json("").unwrap(), OAuth2IntegrationConfig::default());
        assert!(OAuth2IntegrationConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_redirect_uri_override() {
        let mut config = OAuth2IntegrationConfig::default();
        assert_eq!(config.redirect_uri_or(|| "fallback".to_string()), "fallback");

        config.redirect_uri = Some("https://app.example.com/cb".to_string());
        assert_eq!(config.redirect_uri_or(|| "fallback".to_string()), "https://app.example.com/cb");
    }
}
