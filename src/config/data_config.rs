//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 실행 환경, 마이그레이션 관련 설정을 관리합니다.

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수로 현재 실행 환경을 판별합니다. (기본값: production)
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 마이그레이션 환경 설정
pub struct MigrationConfig;

impl MigrationConfig {
    /// 적용된 마이그레이션 버전을 기록하는 전용 컬렉션
    ///
    /// 다른 마이그레이션 이력과 섞이지 않도록 `_extend` 접미사를 가진 별도 컬렉션을 사용합니다.
    pub const DEFAULT_VERSION_COLLECTION: &'static str = "migration_version_extend";

    pub fn version_collection() -> String {
        env::var("MIGRATION_VERSION_COLLECTION")
            .unwrap_or_else(|_| Self::DEFAULT_VERSION_COLLECTION.to_string())
    }
}
