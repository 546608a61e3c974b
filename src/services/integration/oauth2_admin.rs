//! 범용 OAuth2 프로바이더 관리 로직
//!
//! 저장소와 코덱을 인자로 받는 함수들이라 서비스 싱글톤 없이도 테스트할 수 있습니다.
//!
//! ## 저장 흐름
//!
//! ```text
//! request.validate()
//!   → 기존 행 조회 (없으면 비활성 행 생성)
//!   → Client Secret 결정 (마스킹 값이면 기존 값 유지)
//!   → status || test 이면 연결 테스트
//!   → test 이면 저장하지 않고 반환
//!   → 저장
//! ```

use log::{info, warn};
use serde_json::Value;
use validator::Validate;

use crate::config::{AuthProvider, ConsoleConfig};
use crate::domain::dto::integrations::{OAuth2ConfigRequest, OAuth2ConfigResponse, OAuth2ConfigView};
use crate::domain::entities::integrations::{IntegrationClassify, OAuth2IntegrationConfig, SystemIntegration};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::integrations::IntegrationStore;
use crate::services::oauth::oa_oauth::join_endpoint;
use crate::services::oauth::provider::{send_token_request, TokenRequest};
use crate::services::oauth::secret::SecretCodec;
use crate::utils::string_utils::{mask_secret, validate_required_string};

/// 연결 테스트 입력
pub struct ConnectionSettings<'a> {
    pub config: &'a OAuth2IntegrationConfig,
    pub app_id: &'a str,
    /// 평문 Client Secret
    pub app_secret: &'a str,
    pub redirect_uri: String,
}

/// `oauth2` 행을 조회하고, 없으면 비활성 행을 만들어 저장합니다.
pub async fn load_or_create(store: &dyn IntegrationStore) -> AppResult<SystemIntegration> {
    if let Some(integration) = store.find_by_classify(IntegrationClassify::OAuth2).await? {
        return Ok(integration);
    }

    info!("📝 OAuth2 연동 행이 없어 비활성 상태로 생성합니다");
    store.save(&SystemIntegration::new_disabled(IntegrationClassify::OAuth2)).await
}

/// 관리자 화면용 뷰. Client Secret은 마스킹됩니다.
pub fn to_view(integration: &SystemIntegration, codec: &dyn SecretCodec) -> AppResult<OAuth2ConfigView> {
    let secret = codec.decode(&integration.app_secret)?;
    Ok(OAuth2ConfigView {
        classify: integration.classify,
        status: integration.status,
        app_id: integration.app_id.clone(),
        app_secret: mask_secret(&secret),
        settings: integration.oauth2_config()?,
    })
}

pub async fn get_oauth2_config(
    store: &dyn IntegrationStore,
    codec: &dyn SecretCodec,
    host: String,
) -> AppResult<OAuth2ConfigResponse> {
    let integration = load_or_create(store).await?;
    Ok(OAuth2ConfigResponse {
        host,
        config: to_view(&integration, codec)?,
    })
}

/// 제출된 Client Secret이 조회 때 내려준 마스킹 값이면 저장된 값을 유지합니다.
pub fn resolve_secret(submitted: &str, stored: &str) -> String {
    if submitted == mask_secret(stored) {
        stored.to_string()
    } else {
        submitted.trim().to_string()
    }
}

pub async fn set_oauth2_config(
    store: &dyn IntegrationStore,
    codec: &dyn SecretCodec,
    http: &reqwest::Client,
    console_api_url: &str,
    request: OAuth2ConfigRequest,
) -> AppResult<OAuth2ConfigView> {
    request
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let mut integration = load_or_create(store).await?;
    let stored_secret = codec.decode(&integration.app_secret)?;
    let app_secret = resolve_secret(&request.app_secret, &stored_secret);
    let app_id = request.app_id.trim().to_string();
    let config = request.to_config();

    if request.status || request.test {
        let settings = ConnectionSettings {
            config: &config,
            app_id: &app_id,
            app_secret: &app_secret,
            redirect_uri: config.redirect_uri_or(|| {
                ConsoleConfig::redirect_uri_for(console_api_url, AuthProvider::OAuth2.as_str())
            }),
        };
        test_connection(http, &settings, &request.code).await?;
    }

    integration.status = request.status;
    integration.app_id = app_id;
    integration.app_secret = codec.encode(&app_secret);
    integration.set_oauth2_config(&config)?;

    if request.test {
        info!("🧪 OAuth2 연결 테스트 완료 (저장하지 않음)");
        return to_view(&integration, codec);
    }

    integration.touch();
    let saved = store.save(&integration).await?;
    info!("✅ OAuth2 연동 설정 저장: status={}", saved.status);
    to_view(&saved, codec)
}

/// 토큰 엔드포인트에 실제 code 교환을 시도해 설정을 검증합니다.
///
/// code가 비어 있으면 검사 없이 통과합니다.
pub async fn test_connection(
    http: &reqwest::Client,
    settings: &ConnectionSettings<'_>,
    code: &str,
) -> AppResult<()> {
    let code = code.trim();
    if code.is_empty() {
        return Ok(());
    }

    let config = settings.config;
    let server_url = validate_required_string(&config.server_url, "server_url")?;
    validate_required_string(&config.token_url, "token_url")?;
    let client_id = validate_required_string(settings.app_id, "app_id")?;
    let client_secret = validate_required_string(settings.app_secret, "app_secret")?;

    if !server_url.starts_with("http://") && !server_url.starts_with("https://") {
        return Err(AppError::ValidationError(
            "server_url은 http:// 또는 https:// 로 시작해야 합니다".to_string(),
        ));
    }

    let token_url = join_endpoint(&server_url, &config.token_url);
    let request = TokenRequest {
        token_url: &token_url,
        client_id: &client_id,
        client_secret: &client_secret,
        code,
        redirect_uri: &settings.redirect_uri,
        auth_method: config.auth_method(),
    };

    let response = send_token_request(http, &request)
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("토큰 엔드포인트 연결 실패 ({}): {}", token_url, e)))?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        warn!("⚠️ OAuth2 연결 테스트 실패: status={} url={}", status, token_url);
        return Err(AppError::ExternalServiceError(format!(
            "토큰 엔드포인트가 {}을(를) 반환했습니다: {}", status, token_url
        )));
    }

    // 본문이 JSON이 아니면 형식 검사는 건너뜁니다
    let body: Value = response.json().await.unwrap_or(Value::Null);
    if let Some(code) = body.get("code").and_then(Value::as_i64) {
        if code != 0 {
            let info = body.get("info").and_then(Value::as_str).unwrap_or("unknown error");
            return Err(AppError::ExternalServiceError(format!("OAuth2 서버 오류 ({}): {}", code, info)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::integrations::memory_store::MemoryIntegrationStore;
    use crate::services::oauth::secret::Base64SecretCodec;
    use crate::services::oauth::test_support::{self, CLIENT_ID, CLIENT_SECRET, GOOD_CODE};

    const CONSOLE: &str = "https://console.example.com";

    fn request(server_url: &str, token_url: &str) -> OAuth2ConfigRequest {
        OAuth2ConfigRequest {
            status: true,
            server_url: server_url.to_string(),
            token_url: token_url.to_string(),
            userinfo_url: "/oauth/userinfo".to_string(),
            app_id: CLIENT_ID.to_string(),
            app_secret: CLIENT_SECRET.to_string(),
            user_id_field: "data.id".to_string(),
            code: GOOD_CODE.to_string(),
            ..Default::default()
        }
    }

    async fn set(store: &MemoryIntegrationStore, request: OAuth2ConfigRequest) -> AppResult<OAuth2ConfigView> {
        set_oauth2_config(store, &Base64SecretCodec, &reqwest::Client::new(), CONSOLE, request).await
    }

    #[test]
    fn test_resolve_secret() {
        assert_eq!(resolve_secret("te*******et", "test-secret"), "test-secret");
        assert_eq!(resolve_secret("****", "abcd"), "abcd");
        assert_eq!(resolve_secret(" new-secret ", "test-secret"), "new-secret");
        assert_eq!(resolve_secret("", ""), "");
    }

    #[test]
    fn test_resolve_secret_accepts_new_secret_with_asterisk() {
        assert_eq!(resolve_secret("new*secret-value", "old-secret"), "new*secret-value");
        assert_eq!(resolve_secret("ol**et", "old-secret"), "ol**et");
        assert_eq!(resolve_secret("ol******et", "old-secret"), "old-secret");
    }

    #[actix_web::test]
    async fn test_get_creates_disabled_row() {
        let store = MemoryIntegrationStore::default();

        let response = get_oauth2_config(&store, &Base64SecretCodec, CONSOLE.to_string()).await.unwrap();

        assert_eq!(response.host, CONSOLE);
        assert!(!response.config.status);
        assert_eq!(response.config.classify, IntegrationClassify::OAuth2);
        assert!(store.get(IntegrationClassify::OAuth2).is_some());
    }

    #[actix_web::test]
    async fn test_set_saves_after_successful_test() {
        let base = test_support::spawn_fake_provider();
        let store = MemoryIntegrationStore::default();

        let view = set(&store, request(&base, "/oauth/token")).await.unwrap();

        assert!(view.status);
        assert_eq!(view.app_secret, mask_secret(CLIENT_SECRET));
        let saved = store.get(IntegrationClassify::OAuth2).unwrap();
        assert_eq!(Base64SecretCodec.decode(&saved.app_secret).unwrap(), CLIENT_SECRET);
        assert_eq!(saved.oauth2_config().unwrap().server_url, base);
    }

    #[actix_web::test]
    async fn test_masked_secret_keeps_stored_value() {
        let base = test_support::spawn_fake_provider();
        let store = MemoryIntegrationStore::default();
        set(&store, request(&base, "/oauth/token")).await.unwrap();

        let mut resubmit = request(&base, "/oauth/token");
        resubmit.app_secret = mask_secret(CLIENT_SECRET);
        resubmit.user_name_field = "data.name".to_string();
        set(&store, resubmit).await.unwrap();

        let saved = store.get(IntegrationClassify::OAuth2).unwrap();
        assert_eq!(Base64SecretCodec.decode(&saved.app_secret).unwrap(), CLIENT_SECRET);
        assert_eq!(saved.oauth2_config().unwrap().user_name_field, "data.name");
    }

    #[actix_web::test]
    async fn test_test_mode_does_not_save() {
        let base = test_support::spawn_fake_provider();
        let store = MemoryIntegrationStore::default();

        let mut req = request(&base, "/oauth/token");
        req.test = true;
        req.status = false;
        let view = set(&store, req).await.unwrap();

        assert_eq!(view.settings.server_url, base);
        let row = store.get(IntegrationClassify::OAuth2).unwrap();
        assert_eq!(row.config, "{}");
        assert!(!row.status);
    }

    #[actix_web::test]
    async fn test_failed_connection_blocks_save() {
        let base = test_support::spawn_fake_provider();
        let store = MemoryIntegrationStore::default();

        let mut req = request(&base, "/oauth/token");
        req.code = "rejected".to_string();
        let result = set(&store, req).await;

        match result {
            Err(AppError::ExternalServiceError(msg)) => assert!(msg.contains("/oauth/token")),
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(store.get(IntegrationClassify::OAuth2).unwrap().config, "{}");
    }

    #[actix_web::test]
    async fn test_disabled_without_test_skips_connection() {
        let store = MemoryIntegrationStore::default();

        let mut req = request("https://unreachable.invalid", "/oauth/token");
        req.status = false;
        let view = set(&store, req).await.unwrap();

        assert!(!view.status);
    }

    #[actix_web::test]
    async fn test_invalid_request_is_rejected() {
        let store = MemoryIntegrationStore::default();

        let result = set(&store, request("ftp://sso.example.com", "/oauth/token")).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_connection_business_error() {
        let base = test_support::spawn_fake_provider();
        let config = OAuth2IntegrationConfig {
            server_url: base.clone(),
            token_url: "/oauth/token-business-error".to_string(),
            ..Default::default()
        };
        let settings = ConnectionSettings {
            config: &config,
            app_id: CLIENT_ID,
            app_secret: CLIENT_SECRET,
            redirect_uri: format!("{}/cb", CONSOLE),
        };

        match test_connection(&reqwest::Client::new(), &settings, GOOD_CODE).await {
            Err(AppError::ExternalServiceError(msg)) => assert!(msg.contains("invalid app")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_connection_requirements() {
        let config = OAuth2IntegrationConfig {
            server_url: "sso.example.com".to_string(),
            token_url: "/token".to_string(),
            ..Default::default()
        };
        let mut settings = ConnectionSettings {
            config: &config,
            app_id: CLIENT_ID,
            app_secret: "",
            redirect_uri: String::new(),
        };
        let http = reqwest::Client::new();

        // code 가 없으면 검사하지 않음
        assert!(test_connection(&http, &settings, "").await.is_ok());

        match test_connection(&http, &settings, GOOD_CODE).await {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("app_secret")),
            other => panic!("unexpected: {:?}", other),
        }

        settings.app_secret = CLIENT_SECRET;
        match test_connection(&http, &settings, GOOD_CODE).await {
            Err(AppError::ValidationError(msg)) => assert!(msg.contains("http")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
