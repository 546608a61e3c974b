//! # 스키마 마이그레이션
//!
//! MongoDB에는 스키마가 없으므로 마이그레이션은 인덱스 생성 같은 데이터베이스 명령의 목록입니다.
//! 적용 이력은 다른 마이그레이션 이력과 섞이지 않도록 전용 컬렉션
//! (`migration_version_extend`)에 기록합니다.
//!
//! ```text
//! migrate            → 온라인: 접속 → 적용 이력 조회 → 미적용분 실행 → 버전 기록
//! migrate --offline  → 오프라인: 접속 없이 mongosh 스크립트 출력
//! ```
//!
//! 새 마이그레이션은 `versions/`에 추가하고 [`all_migrations`]에 등록합니다.

pub mod env;
pub mod versions;

use mongodb::bson::Document;

pub use env::{MigrationEnvironment, MigrationMode};

/// 하나의 마이그레이션 단위
pub trait Migration: Send + Sync {
    /// 정렬 가능한 고유 버전 (`0001`, `0002`, ...)
    fn version(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// 순서대로 실행할 데이터베이스 명령
    fn commands(&self) -> Vec<Document>;
}

/// 등록된 모든 마이그레이션을 버전 순으로 반환합니다.
pub fn all_migrations() -> Vec<Box<dyn Migration>> {
    let mut migrations: Vec<Box<dyn Migration>> = vec![
        Box::new(versions::m0001_integration_classify_index::IntegrationClassifyIndex),
        Box::new(versions::m0002_integration_updated_at_index::IntegrationUpdatedAtIndex),
    ];
    migrations.sort_by_key(|m| m.version());
    migrations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_versions_are_unique_and_ordered() {
        let migrations = all_migrations();
        let versions: Vec<&str> = migrations.iter().map(|m| m.version()).collect();

        let unique: HashSet<&str> = versions.iter().copied().collect();
        assert_eq!(unique.len(), versions.len());

        let mut sorted = versions.clone();
        sorted.sort();
        assert_eq!(versions, sorted);
        assert_eq!(versions.first(), Some(&"0001"));
    }

    #[test]
    fn test_every_migration_has_commands() {
        for migration in all_migrations() {
            assert!(!migration.commands().is_empty(), "{}", migration.version());
            assert!(!migration.description().is_empty());
        }
    }
}
