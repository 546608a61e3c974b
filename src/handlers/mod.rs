//! # HTTP Request Handlers
//!
//! 각 핸들러는 서비스 싱글톤(`X::instance()`)을 호출하고 `Result<HttpResponse, AppError>`를
//! 반환합니다. 에러는 [`AppError`](crate::errors::errors::AppError)의 `ResponseError` 구현을 통해
//! 상태 코드와 `{"error": "..."}` 본문으로 변환됩니다.
//!
//! ```text
//! Client ──► Handlers ──► Services ──► Repositories / OAuth providers
//! ```
//!
//! - [`oauth`] - 서드파티 로그인과 SSO URL
//! - [`integration`] - 범용 OAuth2 프로바이더 관리 (관리자 전용)

pub mod oauth;
pub mod integration;
