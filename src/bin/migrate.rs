//! 마이그레이션 실행기
//!
//! ```bash
//! cargo run --bin migrate                       # 온라인: 미적용 마이그레이션 실행
//! cargo run --bin migrate -- --offline          # 스크립트를 stdout으로 출력
//! cargo run --bin migrate -- --offline --since 0001 --output upgrade.js
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use oauth_login_backend::db::Database;
use oauth_login_backend::migrations::{all_migrations, MigrationEnvironment, MigrationMode};

#[derive(Debug, Parser)]
#[command(name = "migrate", version, about = "Apply or render schema migrations")]
struct Args {
    /// 데이터베이스에 접속하지 않고 mongosh 스크립트를 출력
    #[arg(long)]
    offline: bool,

    /// 오프라인 스크립트 출력 파일 (기본: stdout)
    #[arg(long, short, requires = "offline")]
    output: Option<PathBuf>,

    /// 이 버전 이후의 마이그레이션만 출력
    #[arg(long, requires = "offline")]
    since: Option<String>,
}

#[actix_web::main]
async fn main() -> ExitCode {
    load_env_file();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();
    let environment = MigrationEnvironment::from_env(args.since.clone());
    let migrations = all_migrations();

    let result = match MigrationMode::from_flag(args.offline) {
        MigrationMode::Offline => match &args.output {
            Some(path) => File::create(path)
                .map_err(|e| format!("{} 생성 실패: {}", path.display(), e))
                .and_then(|file| {
                    let mut writer = BufWriter::new(file);
                    environment.run_offline(&migrations, &mut writer).map_err(|e| e.to_string())
                }),
            None => environment
                .run_offline(&migrations, &mut io::stdout().lock())
                .map_err(|e| e.to_string()),
        },
        MigrationMode::Online => match Database::new().await {
            Ok(database) => environment
                .run_online(&database, &migrations)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(format!("데이터베이스 연결 실패: {}", e)),
        },
    };

    match result {
        Ok(count) => {
            info!("마이그레이션 {}건 처리 ({})", count, environment.version_collection());
            ExitCode::SUCCESS
        }
        Err(message) => {
            error!("❌ {}", message);
            ExitCode::FAILURE
        }
    }
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let file = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };
    if dotenv::from_filename(file).is_err() {
        dotenv::dotenv().ok();
    }
}
