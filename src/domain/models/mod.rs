//! 저장되지 않는 도메인 모델

pub mod oauth;
