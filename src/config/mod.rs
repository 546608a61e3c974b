//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//! `main`에서 `PROFILE`에 맞는 `.env` 파일을 먼저 로드한 뒤 각 설정 구조체가 값을 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경, 마이그레이션 설정
//! - [`auth_config`] - GitHub/Google 자격 증명, 콘솔 주소, 관리자 토큰, HTTP 클라이언트
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="oauth_login"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 로그인
//! export CONSOLE_API_URL="https://console.example.com"
//! export GITHUB_CLIENT_ID="..."
//! export GOOGLE_CLIENT_ID="..."
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
