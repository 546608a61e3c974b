//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로로 싱글톤 관리되는 서비스들을 제공합니다.
//!
//! - [`oauth`] - GitHub, Google, 범용 OAuth2/OIDC 로그인
//! - [`integration`] - 범용 프로바이더 설정 관리
//!
//! 서비스끼리는 `Arc` 필드로 서로를 주입받지 않습니다. 필요하면 `X::instance()`를 호출합니다.
//!
//! ```rust,ignore
//! use crate::services::{oauth::OAuthLoginService, integration::IntegrationService};
//!
//! let login = OAuthLoginService::instance();
//! let admin = IntegrationService::instance();
//! ```

pub mod oauth;
pub mod integration;
