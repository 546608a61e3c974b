//! # 범용 OAuth2/OIDC 프로바이더
//!
//! 관리자가 `system_integrations`의 `oauth2` 행에 저장한 설정만으로
//! 임의의 OAuth2/OIDC 서버와 로그인 흐름을 수행합니다.
//!
//! ## 설정 해석
//!
//! 설정은 호출마다 저장소에서 다시 읽습니다. 관리자 화면에서 바꾼 값이 재시작 없이 반영됩니다.
//! 행이 없거나 비활성화되어 있으면 "설정되지 않음"으로 취급합니다.
//!
//! ```text
//! discovery_url 설정됨 → GET discovery → authorization/token/userinfo_endpoint
//!                                         (없는 항목은 아래 규칙으로 대체)
//! 그 외               → server_url + path
//!                        path 가 http(s):// 로 시작하면 그대로 사용
//! ```
//!
//! ## 실패 처리
//!
//! | 단계 | 설정 없음 | 프로바이더 오류 |
//! |------|-----------|-----------------|
//! | 인가 URL | `None` | - |
//! | 토큰 교환 | `None` | 200 아님/JSON 아님/토큰 없음 → `None` (로그 기록) |
//! | 사용자 정보 | `null` | 2xx 아님 → 에러 |
//! | 정규화 | 빈 `OAuthUserInfo` | id 없음 → 인증 에러 |

use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use crate::config::{AuthProvider, ConsoleConfig, HttpClientConfig};
use crate::domain::entities::integrations::{IntegrationClassify, OAuth2IntegrationConfig};
use crate::domain::models::oauth::{DiscoveryDocument, OAuthUserInfo};
use crate::errors::errors::AppError;
use crate::repositories::integrations::IntegrationStore;
use crate::services::oauth::field_path::{extract_field, is_blank, stringify_value};
use crate::services::oauth::provider::{build_url, send_token_request, OAuth, TokenRequest};
use crate::services::oauth::secret::SecretCodec;

const INVALID_USER_DATA: &str = "OAuth2 사용자 데이터 형식이 올바르지 않습니다. 다시 로그인해 주세요.";

/// 활성화된 연동 행에서 읽어낸 실행 설정
#[derive(Debug, Clone)]
pub struct OaSettings {
    pub app_id: String,
    /// 복호화된 Client Secret
    pub app_secret: String,
    pub config: OAuth2IntegrationConfig,
}

/// 실제 호출에 쓰일 엔드포인트
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEndpoints {
    pub authorize: String,
    pub token: String,
    pub userinfo: String,
}

/// `server_url`과 경로를 합칩니다.
///
/// 절대 URL 경로는 그대로 쓰고, 아니면 둘 사이에 `/` 하나만 둡니다.
pub fn join_endpoint(server_url: &str, path: &str) -> String {
    let path = path.trim();
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = server_url.trim().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match (base.is_empty(), path.is_empty()) {
        (true, _) => path.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{}/{}", base, path),
    }
}

pub struct OaOAuth {
    store: Arc<dyn IntegrationStore>,
    codec: Arc<dyn SecretCodec>,
    console_api_url: String,
    http: reqwest::Client,
}

impl OaOAuth {
    pub fn new(store: Arc<dyn IntegrationStore>, codec: Arc<dyn SecretCodec>, console_api_url: String) -> Self {
        Self {
            store,
            codec,
            console_api_url,
            http: HttpClientConfig::build_client(),
        }
    }

    /// 활성화된 `oauth2` 연동 설정을 읽습니다. 없거나 비활성이면 `None`.
    pub async fn load_settings(&self) -> Result<Option<OaSettings>, AppError> {
        let integration = match self.store.find_by_classify(IntegrationClassify::OAuth2).await? {
            Some(integration) if integration.status => integration,
            Some(_) => {
                debug!("OAuth2 연동이 비활성화되어 있습니다");
                return Ok(None);
            }
            None => return Ok(None),
        };

        Ok(Some(OaSettings {
            config: integration.oauth2_config()?,
            app_secret: self.codec.decode(&integration.app_secret)?,
            app_id: integration.app_id,
        }))
    }

    /// 콜백 주소: 설정값 또는 `{CONSOLE_API_URL}/console/api/oauth/authorize/oauth2`
    pub fn redirect_uri(&self, config: &OAuth2IntegrationConfig) -> String {
        config.redirect_uri_or(|| {
            ConsoleConfig::redirect_uri_for(&self.console_api_url, AuthProvider::OAuth2.as_str())
        })
    }

    async fn fetch_discovery(&self, discovery_url: &str) -> Result<DiscoveryDocument, AppError> {
        let response = self.http
            .get(discovery_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("OIDC 디스커버리 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "OIDC 디스커버리 조회 실패: {} ({})", response.status(), discovery_url
            )));
        }

        response
            .json::<DiscoveryDocument>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("OIDC 디스커버리 파싱 실패: {}", e)))
    }

    /// 디스커버리 또는 설정 경로로 엔드포인트를 결정합니다.
    pub async fn resolve_endpoints(&self, config: &OAuth2IntegrationConfig) -> Result<ResolvedEndpoints, AppError> {
        let discovered = match config.discovery_url.as_deref() {
            Some(url) => self.fetch_discovery(url).await?,
            None => DiscoveryDocument::default(),
        };

        let pick = |found: Option<String>, path: &str| {
            found
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| join_endpoint(&config.server_url, path))
        };

        Ok(ResolvedEndpoints {
            authorize: pick(discovered.authorization_endpoint, &config.authorize_url),
            token: pick(discovered.token_endpoint, &config.token_url),
            userinfo: pick(discovered.userinfo_endpoint, &config.userinfo_url),
        })
    }
}

#[async_trait]
impl OAuth for OaOAuth {
    fn provider(&self) -> AuthProvider {
        AuthProvider::OAuth2
    }

    async fn get_authorization_url(&self, invite_token: Option<&str>) -> Result<Option<String>, AppError> {
        let Some(settings) = self.load_settings().await? else {
            return Ok(None);
        };
        let endpoints = self.resolve_endpoints(&settings.config).await?;
        let redirect_uri = self.redirect_uri(&settings.config);

        let mut params = vec![
            ("redirect_uri", redirect_uri.as_str()),
            ("client_id", settings.app_id.as_str()),
            ("response_type", "code"),
        ];
        if let Some(scope) = settings.config.scope.as_deref() {
            params.push(("scope", scope));
        }
        if let Some(token) = invite_token.filter(|t| !t.is_empty()) {
            params.push(("state", token));
        }

        Ok(Some(build_url(&endpoints.authorize, &params)))
    }

    async fn get_access_token(&self, code: &str) -> Result<Option<String>, AppError> {
        let Some(settings) = self.load_settings().await? else {
            return Ok(None);
        };
        let endpoints = self.resolve_endpoints(&settings.config).await?;
        let redirect_uri = self.redirect_uri(&settings.config);

        let request = TokenRequest {
            token_url: &endpoints.token,
            client_id: &settings.app_id,
            client_secret: &settings.app_secret,
            code,
            redirect_uri: &redirect_uri,
            auth_method: settings.config.auth_method(),
        };

        let response = send_token_request(&self.http, &request)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("OAuth2 토큰 요청 실패: {}", e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("OAuth2 토큰 응답 수신 실패: {}", e)))?;
        let body = String::from_utf8_lossy(&bytes);

        if status != reqwest::StatusCode::OK {
            warn!("⚠️ OAuth2 토큰 교환 실패: status={} url={} body={}", status, endpoints.token, body);
            return Ok(None);
        }

        let json: Value = match serde_json::from_str(&body) {
            Ok(json) => json,
            Err(e) => {
                warn!("⚠️ OAuth2 토큰 응답이 JSON이 아닙니다: {} body={}", e, body);
                return Ok(None);
            }
        };

        match json.get("access_token").and_then(Value::as_str).filter(|t| !t.is_empty()) {
            Some(token) => {
                info!("✅ OAuth2 토큰 교환 성공");
                Ok(Some(token.to_string()))
            }
            None => {
                warn!("⚠️ OAuth2 토큰 응답에 access_token이 없습니다: {}", json);
                Ok(None)
            }
        }
    }

    async fn get_raw_user_info(&self, token: &str) -> Result<Value, AppError> {
        let Some(settings) = self.load_settings().await? else {
            return Ok(Value::Null);
        };
        let endpoints = self.resolve_endpoints(&settings.config).await?;

        let response = self.http
            .get(&endpoints.userinfo)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("OAuth2 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "OAuth2 사용자 정보 조회 실패: {} ({})", response.status(), endpoints.userinfo
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("OAuth2 사용자 정보 파싱 실패: {}", e)))
    }

    async fn transform_user_info(&self, raw: Value) -> Result<OAuthUserInfo, AppError> {
        if raw.as_object().is_none_or(|map| map.is_empty()) {
            return Ok(OAuthUserInfo::default());
        }
        let Some(settings) = self.load_settings().await? else {
            return Ok(OAuthUserInfo::default());
        };
        let config = &settings.config;

        let id = extract_field(&raw, &config.user_id_field);
        if is_blank(id.as_ref()) {
            warn!("⚠️ OAuth2 사용자 정보에서 ID를 찾지 못했습니다: field={} raw={}", config.user_id_field, raw);
            return Err(AppError::AuthenticationError(INVALID_USER_DATA.to_string()));
        }

        let field = |path: &str| {
            extract_field(&raw, path)
                .map(|value| stringify_value(&value))
                .unwrap_or_default()
        };

        Ok(OAuthUserInfo::new(
            id.map(|value| stringify_value(&value)).unwrap_or_default(),
            field(&config.user_name_field),
            field(&config.user_email_field),
        ))
    }
}
