//! 에러 처리 모듈
//!
//! [`errors`] 서브모듈의 `AppError`와 `AppResult`를 재export 합니다.

pub mod errors;

pub use errors::*;
