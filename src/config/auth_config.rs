//! # Authentication Configuration Module
//!
//! 서드파티 로그인(GitHub, Google, 관리자 설정형 OAuth2/OIDC)에 필요한 설정을 관리합니다.
//! GitHub/Google은 환경 변수로 고정 설정되고, 범용 OAuth2 프로바이더는
//! 관리자 화면에서 데이터베이스에 저장한 통합(Integration) 설정을 사용합니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **GitHub OAuth**: `GITHUB_CLIENT_ID` / `GITHUB_CLIENT_SECRET`
//! 2. **Google OAuth 2.0**: `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET`
//! 3. **범용 OAuth2/OIDC**: `system_integrations` 컬렉션의 `oauth2` 행
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export CONSOLE_API_URL="https://console.example.com"
//! export GITHUB_CLIENT_ID="Iv1.xxxxxxxx"
//! export GITHUB_CLIENT_SECRET="..."
//! export GOOGLE_CLIENT_ID="123-abc.apps.googleusercontent.com"
//! export GOOGLE_CLIENT_SECRET="..."
//! export ADMIN_API_TOKEN="change-me"
//! ```
//!
//! 프로바이더 자격 증명이 없으면 해당 로그인 버튼만 비활성화되고 서버는 정상 기동합니다.

use std::env;
use crate::domain::models::oauth::OAuthCredentials;

/// 콘솔 API 서버 주소 설정
///
/// OAuth 콜백 redirect URI의 기본값을 만드는 데 사용됩니다.
pub struct ConsoleConfig;

impl ConsoleConfig {
    /// 콘솔 API 서버의 공개 URL (끝의 `/` 제거)
    ///
    /// # 기본값
    ///
    /// `http://localhost:8080`
    pub fn api_url() -> String {
        env::var("CONSOLE_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// 프로바이더별 기본 콜백 URI
    ///
    /// ```text
    /// {CONSOLE_API_URL}/console/api/oauth/authorize/{provider}
    /// ```
    pub fn default_redirect_uri(provider: &str) -> String {
        Self::redirect_uri_for(&Self::api_url(), provider)
    }

    /// 주어진 API 주소로 콜백 URI를 조합합니다.
    pub fn redirect_uri_for(api_url: &str, provider: &str) -> String {
        format!(
            "{}/console/api/oauth/authorize/{}",
            api_url.trim_end_matches('/'),
            provider
        )
    }
}

/// GitHub OAuth App 설정
///
/// GitHub Settings > Developer settings > OAuth Apps 에서 발급한 값입니다.
/// Authorization callback URL은 `{CONSOLE_API_URL}/console/api/oauth/authorize/github` 로 등록합니다.
pub struct GitHubOAuthConfig;

impl GitHubOAuthConfig {
    /// GitHub 로그인 자격 증명을 반환합니다.
    ///
    /// `GITHUB_CLIENT_ID` 또는 `GITHUB_CLIENT_SECRET` 이 비어 있으면 `None` 입니다.
    /// `GITHUB_REDIRECT_URI` 가 없으면 콘솔 기본 콜백 주소를 사용합니다.
    pub fn credentials() -> Option<OAuthCredentials> {
        let client_id = non_empty_var("GITHUB_CLIENT_ID")?;
        let client_secret = non_empty_var("GITHUB_CLIENT_SECRET")?;
        let redirect_uri = non_empty_var("GITHUB_REDIRECT_URI")
            .unwrap_or_else(|| ConsoleConfig::default_redirect_uri(AuthProvider::GitHub.as_str()));

        Some(OAuthCredentials::new(client_id, client_secret, redirect_uri))
    }
}

/// Google OAuth 2.0 클라이언트 설정
///
/// Google Cloud Console > APIs & Services > Credentials 에서 생성한 OAuth 클라이언트입니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - 프로덕션에서는 HTTPS redirect URI만 사용하세요
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// Google 로그인 자격 증명을 반환합니다.
    ///
    /// `GOOGLE_CLIENT_ID` 또는 `GOOGLE_CLIENT_SECRET` 이 비어 있으면 `None` 입니다.
    pub fn credentials() -> Option<OAuthCredentials> {
        let client_id = non_empty_var("GOOGLE_CLIENT_ID")?;
        let client_secret = non_empty_var("GOOGLE_CLIENT_SECRET")?;
        let redirect_uri = non_empty_var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|| ConsoleConfig::default_redirect_uri(AuthProvider::Google.as_str()));

        Some(OAuthCredentials::new(client_id, client_secret, redirect_uri))
    }
}

/// 외부 OAuth 서버 호출용 HTTP 클라이언트 설정
pub struct HttpClientConfig;

impl HttpClientConfig {
    /// 요청 타임아웃 (초)
    ///
    /// # 기본값
    ///
    /// 10초
    pub fn timeout_secs() -> u64 {
        env::var("OAUTH_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }

    /// User-Agent 헤더 값
    ///
    /// GitHub API는 User-Agent 가 없는 요청을 거부합니다.
    pub fn user_agent() -> String {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// 공통 설정이 적용된 reqwest 클라이언트를 생성합니다.
    pub fn build_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(Self::timeout_secs()))
            .user_agent(Self::user_agent())
            .build()
            .unwrap_or_else(|e| {
                log::warn!("HTTP 클라이언트 설정 적용 실패, 기본 클라이언트 사용: {}", e);
                reqwest::Client::new()
            })
    }
}

/// 관리자 API 보호용 설정
pub struct AdminConfig;

impl AdminConfig {
    /// 관리자 API Bearer 토큰
    ///
    /// 설정되지 않으면 관리자 API는 모든 요청을 거부합니다.
    pub fn api_token() -> Option<String> {
        non_empty_var("ADMIN_API_TOKEN")
    }
}

/// 지원하는 로그인 프로바이더
///
/// URL 경로(`/console/api/oauth/login/{provider}`)에 쓰이는 소문자 이름으로 직렬화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// GitHub OAuth
    GitHub,

    /// Google OAuth 2.0 / OpenID Connect
    Google,

    /// 관리자가 설정한 범용 OAuth2/OIDC 프로바이더
    #[serde(rename = "oauth2")]
    OAuth2,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다. (대소문자 무관)
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// assert_eq!(AuthProvider::from_str("GitHub")?, AuthProvider::GitHub);
    /// assert!(AuthProvider::from_str("twitter").is_err());
    /// ```
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "github" => Ok(AuthProvider::GitHub),
            "google" => Ok(AuthProvider::Google),
            "oauth2" => Ok(AuthProvider::OAuth2),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    /// 경로와 로그에 쓰이는 소문자 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::GitHub => "github",
            AuthProvider::Google => "google",
            AuthProvider::OAuth2 => "oauth2",
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
