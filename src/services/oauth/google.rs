//! # Google OAuth 2.0
//!
//! Google OpenID Connect 로그인입니다. 사용자 정보는 v3 userinfo 엔드포인트의
//! `sub`와 `email`만 사용합니다.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::{AuthProvider, HttpClientConfig};
use crate::domain::models::oauth::{OAuthCredentials, OAuthUserInfo};
use crate::errors::errors::AppError;
use crate::services::oauth::field_path::{is_blank, stringify_value};
use crate::services::oauth::provider::{build_url, OAuth};

#[derive(Debug, Clone)]
pub struct GoogleEndpoints {
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl Default for GoogleEndpoints {
    fn default() -> Self {
        Self {
            authorize_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_url: "https://www.googleapis.com/oauth2/v3/userinfo".to_string(),
        }
    }
}

pub struct GoogleOAuth {
    credentials: OAuthCredentials,
    endpoints: GoogleEndpoints,
    http: reqwest::Client,
}

impl GoogleOAuth {
    pub fn new(credentials: OAuthCredentials) -> Self {
        Self {
            credentials,
            endpoints: GoogleEndpoints::default(),
            http: HttpClientConfig::build_client(),
        }
    }

    pub fn with_endpoints(mut self, endpoints: GoogleEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

#[async_trait]
impl OAuth for GoogleOAuth {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    async fn get_authorization_url(&self, invite_token: Option<&str>) -> Result<Option<String>, AppError> {
        let mut params = vec![
            ("client_id", self.credentials.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ("scope", "openid email"),
        ];
        if let Some(token) = invite_token.filter(|t| !t.is_empty()) {
            params.push(("state", token));
        }

        Ok(Some(build_url(&self.endpoints.authorize_url, &params)))
    }

    async fn get_access_token(&self, code: &str) -> Result<Option<String>, AppError> {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
        ];

        let response: Value = self.http
            .post(&self.endpoints.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))?;

        match response.get("access_token").and_then(Value::as_str).filter(|t| !t.is_empty()) {
            Some(token) => Ok(Some(token.to_string())),
            None => Err(AppError::AuthenticationError(format!("Error in Google OAuth: {}", response))),
        }
    }

    async fn get_raw_user_info(&self, token: &str) -> Result<Value, AppError> {
        let response = self.http
            .get(&self.endpoints.userinfo_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패: {}", response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }

    async fn transform_user_info(&self, raw: Value) -> Result<OAuthUserInfo, AppError> {
        let sub = raw.get("sub");
        let email = raw.get("email");
        if is_blank(sub) || is_blank(email) {
            return Err(AppError::AuthenticationError("Google 사용자 정보에 sub 또는 email이 없습니다".to_string()));
        }

        Ok(OAuthUserInfo::new(
            sub.map(stringify_value).unwrap_or_default(),
            "",
            email.map(stringify_value).unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::services::oauth::test_support::{self, ACCESS_TOKEN, CLIENT_ID, CLIENT_SECRET, GOOD_CODE};

    fn google(base: &str) -> GoogleOAuth {
        GoogleOAuth::new(OAuthCredentials::new(
            CLIENT_ID.to_string(),
            CLIENT_SECRET.to_string(),
            "https://console.example.com/console/api/oauth/authorize/google".to_string(),
        ))
        .with_endpoints(GoogleEndpoints {
            authorize_url: format!("{}/google/auth", base),
            token_url: format!("{}/google/token", base),
            userinfo_url: format!("{}/google/userinfo", base),
        })
    }

    #[actix_web::test]
    async fn test_authorization_url_params() {
        let oauth = google("https://accounts.example.com");

        let url = oauth.get_authorization_url(Some("inv")).await.unwrap().unwrap();
        assert_eq!(
            url,
            "https://accounts.example.com/google/auth?client_id=test-client&response_type=code\
             &redirect_uri=https%3A%2F%2Fconsole.example.com%2Fconsole%2Fapi%2Foauth%2Fauthorize%2Fgoogle\
             &scope=openid%20email&state=inv"
        );
    }

    #[actix_web::test]
    async fn test_full_login_flow_against_fake_provider() {
        let base = test_support::spawn_fake_provider();
        let oauth = google(&base);

        let token = oauth.get_access_token(GOOD_CODE).await.unwrap().unwrap();
        let user = oauth.get_user_info(&token).await.unwrap();

        assert_eq!(token, ACCESS_TOKEN);
        assert_eq!(user, OAuthUserInfo::new("1099", "", "minsu@gmail.com"));
    }

    #[actix_web::test]
    async fn test_rejected_code_is_error() {
        let base = test_support::spawn_fake_provider();

        assert!(matches!(
            google(&base).get_access_token("expired").await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_transform_requires_email() {
        let oauth = google("http://unused");

        assert!(oauth.transform_user_info(json!({"sub": "1"})).await.is_err());
    }
}
