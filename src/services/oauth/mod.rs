//! 서드파티 로그인 서비스 모듈
//!
//! GitHub, Google, 관리자가 설정한 범용 OAuth2/OIDC 프로바이더를
//! 같은 [`OAuth`] 트레이트로 다룹니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::oauth::OAuthLoginService;
//! use crate::config::AuthProvider;
//!
//! let service = OAuthLoginService::instance();
//! let url = service.login_url(AuthProvider::GitHub, Some("invite")).await?;
//! ```

pub mod provider;
pub mod field_path;
pub mod secret;
pub mod github;
pub mod google;
pub mod oa_oauth;
pub mod oauth_login_service;
#[cfg(test)]
pub mod test_support;

pub use provider::OAuth;
pub use secret::{Base64SecretCodec, SecretCodec};
pub use github::GitHubOAuth;
pub use google::GoogleOAuth;
pub use oa_oauth::OaOAuth;
pub use oauth_login_service::OAuthLoginService;
