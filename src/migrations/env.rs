//! 마이그레이션 실행 환경
//!
//! | 모드 | 접속 | 동작 |
//! |------|------|------|
//! | [`MigrationMode::Offline`] | 없음 | 선택된 마이그레이션을 mongosh 스크립트로 출력 |
//! | [`MigrationMode::Online`] | 애플리케이션 `Database` | 미적용분 실행 후 버전 기록 |

use std::collections::HashSet;
use std::io::Write;

use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{doc, Bson, DateTime, Document};

use crate::config::MigrationConfig;
use crate::db::{render_url, Database};
use crate::errors::errors::AppError;
use crate::migrations::Migration;
use crate::utils::display_terminal::{print_boxed_title, print_migration_step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationMode {
    Offline,
    Online,
}

impl MigrationMode {
    pub fn from_flag(offline: bool) -> Self {
        if offline { MigrationMode::Offline } else { MigrationMode::Online }
    }
}

pub struct MigrationEnvironment {
    version_collection: String,
    /// 이 버전 이후만 대상 (오프라인 전용)
    since: Option<String>,
}

impl MigrationEnvironment {
    pub fn new(version_collection: impl Into<String>, since: Option<String>) -> Self {
        Self {
            version_collection: version_collection.into(),
            since: since.filter(|s| !s.trim().is_empty()),
        }
    }

    /// `MIGRATION_VERSION_COLLECTION` 환경 변수 기준
    pub fn from_env(since: Option<String>) -> Self {
        Self::new(MigrationConfig::version_collection(), since)
    }

    pub fn version_collection(&self) -> &str {
        &self.version_collection
    }

    /// `--since` 이후의 마이그레이션만 고릅니다.
    pub fn select<'a>(&self, migrations: &'a [Box<dyn Migration>]) -> Vec<&'a dyn Migration> {
        migrations
            .iter()
            .map(|m| m.as_ref())
            .filter(|m| match &self.since {
                Some(since) => m.version() > since.as_str(),
                None => true,
            })
            .collect()
    }

    /// 오프라인 스크립트를 생성합니다. 값은 relaxed extended JSON으로 그대로 인라인됩니다.
    pub fn render_offline(&self, migrations: &[Box<dyn Migration>], target_url: &str, database_name: &str) -> String {
        let collection = json_string(&self.version_collection);
        let mut script = String::new();

        script.push_str(&format!("// target: {}\n", render_url(target_url, true)));
        script.push_str(&format!("db = db.getSiblingDB({});\n", json_string(database_name)));

        for migration in self.select(migrations) {
            script.push_str(&format!("\n// {} {}\n", migration.version(), migration.description()));
            for command in migration.commands() {
                script.push_str(&format!(
                    "db.runCommand({});\n",
                    Bson::Document(command).into_relaxed_extjson()
                ));
            }
            script.push_str(&format!(
                "db.getCollection({}).insertOne({{\"version\": {}, \"description\": {}, \"applied_at\": new Date()}});\n",
                collection,
                json_string(migration.version()),
                json_string(migration.description()),
            ));
        }

        script
    }

    /// 접속 없이 스크립트를 `out`에 씁니다. 출력한 마이그레이션 수를 반환합니다.
    pub fn run_offline<W: Write>(&self, migrations: &[Box<dyn Migration>], out: &mut W) -> Result<usize, AppError> {
        let script = self.render_offline(migrations, &Database::configured_uri(), &Database::configured_name());
        out.write_all(script.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| AppError::InternalError(format!("마이그레이션 스크립트 출력 실패: {}", e)))?;

        Ok(self.select(migrations).len())
    }

    /// 미적용 마이그레이션을 버전 순으로 실행하고, 각각 성공 직후 버전을 기록합니다.
    pub async fn run_online(&self, database: &Database, migrations: &[Box<dyn Migration>]) -> Result<usize, AppError> {
        print_boxed_title("🗄️ MIGRATIONS");
        info!("대상 데이터베이스: {} ({})", database.database_name(), database.rendered_url(true));

        let db = database.get_database();
        let versions = db.collection::<Document>(&self.version_collection);

        let applied: HashSet<String> = versions
            .find(doc! {})
            .await
            .map_err(db_error)?
            .try_collect::<Vec<Document>>()
            .await
            .map_err(db_error)?
            .iter()
            .filter_map(|d| d.get_str("version").ok().map(str::to_string))
            .collect();

        let mut count = 0;
        for migration in pending(migrations, &applied) {
            for command in migration.commands() {
                db.run_command(command).await.map_err(|e| {
                    AppError::DatabaseError(format!("마이그레이션 {} 실패: {}", migration.version(), e))
                })?;
            }

            versions
                .insert_one(doc! {
                    "version": migration.version(),
                    "description": migration.description(),
                    "applied_at": DateTime::now(),
                })
                .await
                .map_err(db_error)?;

            print_migration_step(migration.version(), migration.description(), true);
            count += 1;
        }

        info!("✅ 마이그레이션 완료: {}건 적용 (이미 적용됨 {}건)", count, applied.len());
        Ok(count)
    }
}

/// 적용 이력에 없는 마이그레이션 (입력 순서 유지)
pub fn pending<'a>(migrations: &'a [Box<dyn Migration>], applied: &HashSet<String>) -> Vec<&'a dyn Migration> {
    migrations
        .iter()
        .map(|m| m.as_ref())
        .filter(|m| !applied.contains(m.version()))
        .collect()
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn db_error(e: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::all_migrations;

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(MigrationMode::from_flag(true), MigrationMode::Offline);
        assert_eq!(MigrationMode::from_flag(false), MigrationMode::Online);
    }

    #[test]
    fn test_offline_script_contains_commands_and_version_inserts() {
        let env = MigrationEnvironment::new("migration_version_extend", None);

        let script = env.render_offline(&all_migrations(), "mongodb://admin:s3cret@db:27017", "oauth_login");

        assert!(script.starts_with("// target: mongodb://admin:***@db:27017\n"));
        assert!(!script.contains("s3cret"));
        assert!(script.contains("db = db.getSiblingDB(\"oauth_login\");"));
        assert!(script.contains("\"createIndexes\":\"system_integrations\""));
        assert!(script.contains("\"unique\":true"));
        assert!(script.contains("\"updated_at\":-1"));
        assert!(script.contains(
            "db.getCollection(\"migration_version_extend\").insertOne({\"version\": \"0001\""
        ));
        assert_eq!(script.matches("insertOne").count(), 2);
    }

    #[test]
    fn test_since_limits_offline_selection() {
        let migrations = all_migrations();
        let env = MigrationEnvironment::new("migration_version_extend", Some("0001".to_string()));

        let selected: Vec<&str> = env.select(&migrations).iter().map(|m| m.version()).collect();
        assert_eq!(selected, vec!["0002"]);

        let script = env.render_offline(&migrations, "mongodb://localhost:27017", "oauth_login");
        assert!(!script.contains("\"0001\""));
        assert!(script.contains("\"0002\""));
    }

    #[test]
    fn test_run_offline_writes_script() {
        let env = MigrationEnvironment::new("custom_versions", None);
        let mut out = Vec::new();

        let count = env.run_offline(&all_migrations(), &mut out).unwrap();

        assert_eq!(count, 2);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("db.getCollection(\"custom_versions\")"));
    }

    #[test]
    fn test_pending_skips_applied_versions() {
        let migrations = all_migrations();
        let applied: HashSet<String> = ["0001".to_string()].into_iter().collect();

        let versions: Vec<&str> = pending(&migrations, &applied).iter().map(|m| m.version()).collect();

        assert_eq!(versions, vec!["0002"]);
    }
}
