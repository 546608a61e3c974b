//! # Domain Layer
//!
//! 로그인 흐름과 통합 설정에 쓰이는 타입을 모읍니다.
//!
//! - [`entities`] - MongoDB에 저장되는 엔티티 (`SystemIntegration`)
//! - [`models`] - 저장되지 않는 도메인 모델 (`OAuthUserInfo`, 자격 증명, 디스커버리 문서)
//! - [`dto`] - HTTP 요청/응답 구조체

pub mod entities;
pub mod dto;
pub mod models;
