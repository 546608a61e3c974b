//! HTTP 미들웨어
//!
//! - [`AdminTokenMiddleware`] - 관리자 API bearer 토큰 검사

pub mod admin_middleware;
mod admin_inner;

pub use admin_middleware::AdminTokenMiddleware;
