//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 묶어 등록합니다.
//!
//! ```text
//! /health                               헬스체크
//! /console/api/oauth/login/{provider}   로그인 시작 (302)
//! /console/api/oauth/authorize/{provider} 콜백
//! /api/oauth2/sso/url                   웹앱 SSO URL
//! /admin/api/gaia/system/oauth2         범용 프로바이더 설정 (관리자 토큰)
//! ```

use crate::handlers;
use crate::middlewares::AdminTokenMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_oauth_routes(cfg);
    configure_admin_routes(cfg);
}

/// 로그인 라우트 (인증 불필요)
///
/// ```bash
/// curl -i "http://localhost:8080/console/api/oauth/login/github?invite_token=abc"
/// curl "http://localhost:8080/api/oauth2/sso/url?app_code=app1&redirect_url=%2Fchat%2Fapp1"
/// ```
fn configure_oauth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/console/api/oauth")
            .service(handlers::oauth::oauth_login)
            .service(handlers::oauth::oauth_authorize)
    );

    cfg.service(
        web::scope("/api/oauth2/sso")
            .service(handlers::oauth::oauth2_sso_url)
    );
}

/// 관리자 라우트
///
/// ```bash
/// curl http://localhost:8080/admin/api/gaia/system/oauth2 \
///   -H "Authorization: Bearer $ADMIN_API_TOKEN"
/// ```
fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/api/gaia/system")
            .wrap(AdminTokenMiddleware::from_env())
            .service(handlers::integration::get_oauth2_config)
            .service(handlers::integration::set_oauth2_config)
    );
}

/// 헬스체크
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "oauth_login_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "providers": ["github", "google", "oauth2"]
        }
    }))
}
