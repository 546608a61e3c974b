//! # GitHub OAuth
//!
//! GitHub OAuth App 로그인입니다. GitHub은 OIDC를 지원하지 않으므로
//! 사용자 정보와 이메일 목록을 따로 조회해 합칩니다.
//!
//! | 용도 | 엔드포인트 |
//! |------|------------|
//! | Authorization | `https://github.com/login/oauth/authorize` |
//! | Token Exchange | `https://github.com/login/oauth/access_token` |
//! | User | `https://api.github.com/user` |
//! | Emails | `https://api.github.com/user/emails` |
//!
//! 공개 이메일이 없는 사용자는 `{id}+{login}@users.noreply.github.com` 주소를 사용합니다.

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;

use crate::config::{AuthProvider, HttpClientConfig};
use crate::domain::models::oauth::{OAuthCredentials, OAuthUserInfo};
use crate::errors::errors::AppError;
use crate::services::oauth::field_path::{is_blank, stringify_value};
use crate::services::oauth::provider::{build_url, OAuth};

#[derive(Debug, Clone)]
pub struct GitHubEndpoints {
    pub authorize_url: String,
    pub token_url: String,
    pub user_url: String,
    pub emails_url: String,
}

impl Default for GitHubEndpoints {
    fn default() -> Self {
        Self {
            authorize_url: "https://github.com/login/oauth/authorize".to_string(),
            token_url: "https://github.com/login/oauth/access_token".to_string(),
            user_url: "https://api.github.com/user".to_string(),
            emails_url: "https://api.github.com/user/emails".to_string(),
        }
    }
}

pub struct GitHubOAuth {
    credentials: OAuthCredentials,
    endpoints: GitHubEndpoints,
    http: reqwest::Client,
}

impl GitHubOAuth {
    pub fn new(credentials: OAuthCredentials) -> Self {
        Self {
            credentials,
            endpoints: GitHubEndpoints::default(),
            http: HttpClientConfig::build_client(),
        }
    }

    pub fn with_endpoints(mut self, endpoints: GitHubEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// 기본(primary) 이메일을 찾습니다. 조회 실패나 형식 불일치는 빈 문자열입니다.
    async fn primary_email(&self, token: &str) -> String {
        let response = match self.http
            .get(&self.endpoints.emails_url)
            .header(reqwest::header::AUTHORIZATION, format!("token {}", token))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("⚠️ GitHub 이메일 조회 실패: {}", e);
                return String::new();
            }
        };

        let emails: Value = match response.json().await {
            Ok(emails) => emails,
            Err(e) => {
                warn!("⚠️ GitHub 이메일 응답 파싱 실패: {}", e);
                return String::new();
            }
        };

        emails
            .as_array()
            .and_then(|list| list.iter().find(|entry| entry.get("primary") == Some(&Value::Bool(true))))
            .and_then(|entry| entry.get("email"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

#[async_trait]
impl OAuth for GitHubOAuth {
    fn provider(&self) -> AuthProvider {
        AuthProvider::GitHub
    }

    async fn get_authorization_url(&self, invite_token: Option<&str>) -> Result<Option<String>, AppError> {
        let mut params = vec![
            ("client_id", self.credentials.client_id.as_str()),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ("scope", "user:email"),
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
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
        ];

        let response: Value = self.http
            .post(&self.endpoints.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 토큰 요청 실패: {}", e)))?
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 토큰 응답 파싱 실패: {}", e)))?;

        match response.get("access_token").and_then(Value::as_str).filter(|t| !t.is_empty()) {
            Some(token) => Ok(Some(token.to_string())),
            None => Err(AppError::AuthenticationError(format!("Error in GitHub OAuth: {}", response))),
        }
    }

    async fn get_raw_user_info(&self, token: &str) -> Result<Value, AppError> {
        let response = self.http
            .get(&self.endpoints.user_url)
            .header(reqwest::header::AUTHORIZATION, format!("token {}", token))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "GitHub 사용자 정보 조회 실패: {}", response.status()
            )));
        }

        let mut user: Value = response
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("GitHub 사용자 정보 파싱 실패: {}", e)))?;

        let email = self.primary_email(token).await;
        match user.as_object_mut() {
            Some(object) => {
                object.insert("email".to_string(), Value::String(email));
            }
            None => {
                return Err(AppError::ExternalServiceError("GitHub 사용자 정보 형식이 올바르지 않습니다".to_string()));
            }
        }

        debug!("GitHub 사용자 정보 조회 완료");
        Ok(user)
    }

    async fn transform_user_info(&self, raw: Value) -> Result<OAuthUserInfo, AppError> {
        let id = raw.get("id");
        if is_blank(id) {
            return Err(AppError::AuthenticationError("GitHub 사용자 ID가 없습니다".to_string()));
        }
        let id = id.map(stringify_value).unwrap_or_default();

        let name = raw.get("name").map(stringify_value).unwrap_or_default();
        let mut email = raw.get("email").map(stringify_value).unwrap_or_default();
        if email.is_empty() {
            let login = raw.get("login").map(stringify_value).unwrap_or_default();
            email = format!("{}+{}@users.noreply.github.com", id, login);
        }

        Ok(OAuthUserInfo::new(id, name, email))
    }
}
