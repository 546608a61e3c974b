//! OAuth 로그인 백엔드
//!
//! GitHub, Google, 관리자가 설정한 범용 OAuth2/OIDC 프로바이더를 통한
//! 서드파티 로그인과 MongoDB 마이그레이션 부트스트랩을 제공합니다.
//!
//! # Features
//!
//! - **OAuth 로그인**: 인가 URL → code 교환 → 사용자 정보 → `OAuthUserInfo` 정규화
//! - **범용 프로바이더**: 엔드포인트 경로 또는 OIDC 디스커버리, 필드 경로 매핑, `client_secret_post`/`basic`
//! - **관리자 API**: 범용 프로바이더 설정 조회/저장/연결 테스트
//! - **마이그레이션**: 온라인 실행과 오프라인 스크립트 출력 (`migrate` 바이너리)
//! - **싱글톤 DI**: `singleton_macro` 기반 서비스/리포지토리 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /console/api/oauth, /api/oauth2/sso, /admin/api
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────────┐
//! │    Services     │ ──► │ GitHub/Google/OAuth2 │ ← reqwest
//! └─────────────────┘     └──────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← system_integrations
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use oauth_login_backend::config::AuthProvider;
//! use oauth_login_backend::services::oauth::OAuthLoginService;
//!
//! let service = OAuthLoginService::instance();
//! let url = service.login_url(AuthProvider::Google, None).await?;
//! let login = service.authorize(AuthProvider::Google, &code, state).await?;
//! println!("{} <{}>", login.user.id, login.user.email);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod migrations;
