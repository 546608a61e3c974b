//! # OAuth 로그인 서비스
//!
//! HTTP 계층과 개별 프로바이더 사이의 조정자입니다.
//! 요청된 [`AuthProvider`]에 맞는 [`OAuth`] 구현을 만들고 로그인 흐름을 실행합니다.
//!
//! ```text
//! login_url(provider, invite)  → 인가 URL (설정 없음 → 404)
//! authorize(provider, code)    → 토큰 교환 → 사용자 정보 → OAuthLoginResponse
//! sso_url(app_code, redirect)  → 범용 프로바이더 인가 URL (state = redirect)
//! ```
//!
//! 로그인 이후의 세션 발급과 계정 생성은 이 서비스의 범위가 아닙니다.

use std::sync::Arc;
use log::{info, warn};
use singleton_macro::service;

use crate::config::{AuthProvider, ConsoleConfig, GitHubOAuthConfig, GoogleOAuthConfig};
use crate::domain::dto::oauth::{OAuthLoginResponse, SsoUrlResponse};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::integrations::{IntegrationRepository, IntegrationStore};
use crate::services::oauth::{Base64SecretCodec, GitHubOAuth, GoogleOAuth, OAuth, OaOAuth};

#[service]
pub struct OAuthLoginService {
    /// 범용 프로바이더 설정 저장소 (자동 주입)
    integration_repo: Arc<IntegrationRepository>,
}

impl OAuthLoginService {
    pub fn provider(&self, provider: AuthProvider) -> AppResult<Box<dyn OAuth>> {
        build_provider(provider, self.integration_repo.clone())
    }

    pub async fn login_url(&self, provider: AuthProvider, invite_token: Option<&str>) -> AppResult<String> {
        let oauth = self.provider(provider)?;
        login_url(oauth.as_ref(), invite_token).await
    }

    pub async fn authorize(
        &self,
        provider: AuthProvider,
        code: &str,
        state: Option<String>,
    ) -> AppResult<OAuthLoginResponse> {
        let oauth = self.provider(provider)?;
        complete_login(oauth.as_ref(), code, state).await
    }

    /// 웹앱 로그인 페이지용 SSO URL
    pub async fn sso_url(&self, app_code: &str, redirect_url: Option<&str>) -> AppResult<SsoUrlResponse> {
        let oauth = self.provider(AuthProvider::OAuth2)?;
        sso_url(oauth.as_ref(), app_code, redirect_url).await
    }
}

/// 프로바이더 구현을 생성합니다.
///
/// GitHub/Google은 환경 변수 자격 증명이 없으면 `NotFound`입니다.
/// 범용 프로바이더는 항상 생성되며, 설정 여부는 호출 시점에 판단합니다.
pub fn build_provider(provider: AuthProvider, store: Arc<dyn IntegrationStore>) -> AppResult<Box<dyn OAuth>> {
    match provider {
        AuthProvider::GitHub => GitHubOAuthConfig::credentials()
            .map(|credentials| Box::new(GitHubOAuth::new(credentials)) as Box<dyn OAuth>)
            .ok_or_else(|| not_configured(provider)),
        AuthProvider::Google => GoogleOAuthConfig::credentials()
            .map(|credentials| Box::new(GoogleOAuth::new(credentials)) as Box<dyn OAuth>)
            .ok_or_else(|| not_configured(provider)),
        AuthProvider::OAuth2 => Ok(Box::new(OaOAuth::new(
            store,
            Arc::new(Base64SecretCodec),
            ConsoleConfig::api_url(),
        ))),
    }
}

fn not_configured(provider: AuthProvider) -> AppError {
    AppError::NotFound(format!("{} 로그인이 설정되지 않았습니다", provider.as_str()))
}

pub async fn login_url(oauth: &dyn OAuth, invite_token: Option<&str>) -> AppResult<String> {
    oauth
        .get_authorization_url(invite_token)
        .await?
        .ok_or_else(|| not_configured(oauth.provider()))
}

/// code 교환부터 사용자 정보 정규화까지 수행합니다.
pub async fn complete_login(
    oauth: &dyn OAuth,
    code: &str,
    state: Option<String>,
) -> AppResult<OAuthLoginResponse> {
    let provider = oauth.provider();
    if code.trim().is_empty() {
        return Err(AppError::ValidationError("Authorization code가 필요합니다".to_string()));
    }

    let token = oauth.get_access_token(code).await?.ok_or_else(|| {
        warn!("⚠️ {} 액세스 토큰을 받지 못했습니다", provider.as_str());
        AppError::AuthenticationError(format!("{} 액세스 토큰을 받지 못했습니다", provider.as_str()))
    })?;

    let user = oauth.get_user_info(&token).await?;
    if user.is_empty() {
        return Err(not_configured(provider));
    }

    info!("✅ {} 로그인 완료: id={}", provider.as_str(), user.id);
    Ok(OAuthLoginResponse {
        provider,
        user,
        invite_token: state.filter(|s| !s.is_empty()),
    })
}

pub async fn sso_url(oauth: &dyn OAuth, app_code: &str, redirect_url: Option<&str>) -> AppResult<SsoUrlResponse> {
    if app_code.trim().is_empty() {
        return Err(AppError::ValidationError("app_code is required".to_string()));
    }

    let url = login_url(oauth, redirect_url).await?;
    info!("🔗 SSO URL 발급: app_code={}", app_code);
    Ok(SsoUrlResponse { url })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::integrations::{IntegrationClassify, OAuth2IntegrationConfig, SystemIntegration};
    use crate::domain::models::oauth::OAuthCredentials;
    use crate::repositories::integrations::memory_store::MemoryIntegrationStore;
    use crate::services::oauth::github::GitHubEndpoints;
    use crate::services::oauth::secret::SecretCodec;
    use crate::services::oauth::test_support::{self, CLIENT_ID, CLIENT_SECRET, GOOD_CODE};

    fn generic_provider(base: &str, status: bool) -> OaOAuth {
        let mut integration = SystemIntegration::new_disabled(IntegrationClassify::OAuth2);
        integration.status = status;
        integration.app_id = CLIENT_ID.to_string();
        integration.app_secret = Base64SecretCodec.encode(CLIENT_SECRET);
        integration
            .set_oauth2_config(&OAuth2IntegrationConfig {
                server_url: base.to_string(),
                authorize_url: "/oauth/authorize".to_string(),
                token_url: "/oauth/token".to_string(),
                userinfo_url: "/oauth/userinfo".to_string(),
                user_id_field: "data.id".to_string(),
                user_name_field: "data.name".to_string(),
                user_email_field: "data.emails.*.address".to_string(),
                ..Default::default()
            })
            .unwrap();

        OaOAuth::new(
            Arc::new(MemoryIntegrationStore::with(integration)),
            Arc::new(Base64SecretCodec),
            "https://console.example.com".to_string(),
        )
    }

    #[actix_web::test]
    async fn test_build_generic_provider_always_succeeds() {
        let store: Arc<dyn IntegrationStore> = Arc::new(MemoryIntegrationStore::default());

        let oauth = build_provider(AuthProvider::OAuth2, store).unwrap();

        assert_eq!(oauth.provider(), AuthProvider::OAuth2);
    }

    #[actix_web::test]
    async fn test_login_url_not_configured_is_not_found() {
        let oauth = generic_provider("https://sso.example.com", false);

        assert!(matches!(login_url(&oauth, None).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_complete_login_with_generic_provider() {
        let base = test_support::spawn_fake_provider();
        let oauth = generic_provider(&base, true);

        let response = complete_login(&oauth, GOOD_CODE, Some("invite-3".to_string())).await.unwrap();

        assert_eq!(response.provider, AuthProvider::OAuth2);
        assert_eq!(response.user.id, "1001");
        assert_eq!(response.user.name, "Kim Minsu");
        assert_eq!(response.invite_token.as_deref(), Some("invite-3"));
    }

    #[actix_web::test]
    async fn test_complete_login_soft_failure_is_authentication_error() {
        let base = test_support::spawn_fake_provider();
        let oauth = generic_provider(&base, true);

        assert!(matches!(
            complete_login(&oauth, "rejected", None).await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_complete_login_requires_code() {
        let oauth = generic_provider("https://sso.example.com", true);

        assert!(matches!(
            complete_login(&oauth, "  ", None).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_complete_login_with_github() {
        let base = test_support::spawn_fake_provider();
        let oauth = GitHubOAuth::new(OAuthCredentials::new(
            CLIENT_ID.to_string(),
            CLIENT_SECRET.to_string(),
            "https://console.example.com/console/api/oauth/authorize/github".to_string(),
        ))
        .with_endpoints(GitHubEndpoints {
            authorize_url: format!("{}/login/oauth/authorize", base),
            token_url: format!("{}/login/oauth/access_token", base),
            user_url: format!("{}/user", base),
            emails_url: format!("{}/user/emails", base),
        });

        let response = complete_login(&oauth, GOOD_CODE, Some(String::new())).await.unwrap();

        assert_eq!(response.user.email, "octocat@github.example.com");
        assert_eq!(response.invite_token, None);
    }

    #[actix_web::test]
    async fn test_sso_url_uses_redirect_as_state() {
        let oauth = generic_provider("https://sso.example.com", true);

        let response = sso_url(&oauth, "app-1", Some("/chat/app-1")).await.unwrap();
        assert!(response.url.starts_with("https://sso.example.com/oauth/authorize?"));
        assert!(response.url.ends_with("&state=%2Fchat%2Fapp-1"));

        assert!(matches!(
            sso_url(&oauth, "", Some("/chat/app-1")).await,
            Err(AppError::ValidationError(_))
        ));
    }
}
