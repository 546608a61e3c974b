//! # OAuth 프로바이더 공통 인터페이스
//!
//! 모든 프로바이더는 같은 세 단계 프로토콜을 따릅니다.
//!
//! ```text
//! 1. get_authorization_url(invite_token)  → 브라우저를 보낼 인가 URL
//! 2. get_access_token(code)               → authorization code 를 access token 으로 교환
//! 3. get_raw_user_info(token)             → 프로바이더 고유 형식의 사용자 JSON
//!    transform_user_info(raw)             → OAuthUserInfo 로 정규화
//! ```

use async_trait::async_trait;
use base64::Engine;
use serde_json::Value;

use crate::config::AuthProvider;
use crate::domain::models::oauth::{OAuthUserInfo, TokenAuthMethod};
use crate::errors::errors::AppError;

#[async_trait]
pub trait OAuth: Send + Sync {
    fn provider(&self) -> AuthProvider;

    /// 인가 URL을 만듭니다. `invite_token`은 `state`로 전달됩니다.
    ///
    /// 프로바이더가 설정되지 않았으면 `Ok(None)`.
    async fn get_authorization_url(&self, invite_token: Option<&str>) -> Result<Option<String>, AppError>;

    /// authorization code를 access token으로 교환합니다.
    ///
    /// `Ok(None)`은 교환은 시도했으나 토큰을 얻지 못한 경우입니다.
    async fn get_access_token(&self, code: &str) -> Result<Option<String>, AppError>;

    async fn get_raw_user_info(&self, token: &str) -> Result<Value, AppError>;

    async fn transform_user_info(&self, raw: Value) -> Result<OAuthUserInfo, AppError>;

    async fn get_user_info(&self, token: &str) -> Result<OAuthUserInfo, AppError> {
        let raw = self.get_raw_user_info(token).await?;
        self.transform_user_info(raw).await
    }
}

/// `k=v&k=v` 형식의 URL 인코딩된 쿼리 스트링
pub fn build_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// 엔드포인트에 쿼리 스트링을 붙입니다.
pub fn build_url(endpoint: &str, params: &[(&str, &str)]) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}", endpoint, separator, build_query(params))
}

/// `client_secret_basic` 용 Authorization 헤더 값
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", base64::engine::general_purpose::STANDARD.encode(credentials))
}

/// 토큰 엔드포인트 요청 파라미터
pub struct TokenRequest<'a> {
    pub token_url: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
    pub redirect_uri: &'a str,
    pub auth_method: TokenAuthMethod,
}

/// authorization code 교환 요청을 보냅니다.
///
/// `client_secret_post`는 폼 본문에, `client_secret_basic`은 Authorization 헤더에
/// 클라이언트 자격 증명을 싣습니다. 응답 해석은 호출자가 합니다.
pub async fn send_token_request(
    http: &reqwest::Client,
    request: &TokenRequest<'_>,
) -> Result<reqwest::Response, reqwest::Error> {
    let mut form = vec![
        ("code", request.code),
        ("grant_type", "authorization_code"),
        ("redirect_uri", request.redirect_uri),
    ];

    let mut builder = http
        .post(request.token_url)
        .header(reqwest::header::ACCEPT, "application/json");

    match request.auth_method {
        TokenAuthMethod::ClientSecretPost => {
            form.push(("client_id", request.client_id));
            form.push(("client_secret", request.client_secret));
        }
        TokenAuthMethod::ClientSecretBasic => {
            builder = builder.header(
                reqwest::header::AUTHORIZATION,
                basic_auth_header(request.client_id, request.client_secret),
            );
        }
    }

    builder.form(&form).send().await
}
