//! 시스템 연동(범용 OAuth2 프로바이더) 관리 서비스

pub mod oauth2_admin;
pub mod integration_service;

pub use integration_service::IntegrationService;
