//! 테스트용 가짜 OAuth 프로바이더
//!
//! 실제 actix-web 서버를 임의 포트에 띄워 토큰/사용자 정보/디스커버리 엔드포인트를 흉내냅니다.

use std::collections::HashMap;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;

use crate::services::oauth::provider::basic_auth_header;

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";
pub const GOOD_CODE: &str = "good-code";
pub const ACCESS_TOKEN: &str = "test-access-token";

fn has_client_credentials(req: &HttpRequest, form: &HashMap<String, String>) -> bool {
    let via_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == basic_auth_header(CLIENT_ID, CLIENT_SECRET))
        .unwrap_or(false);

    let via_form = form.get("client_id").map(String::as_str) == Some(CLIENT_ID)
        && form.get("client_secret").map(String::as_str) == Some(CLIENT_SECRET);

    via_header || via_form
}

/// 표준 토큰 엔드포인트
async fn token(req: HttpRequest, form: web::Form<HashMap<String, String>>) -> HttpResponse {
    if !has_client_credentials(&req, &form) {
        return HttpResponse::Unauthorized().json(json!({"error": "invalid_client"}));
    }
    if form.get("code").map(String::as_str) != Some(GOOD_CODE) {
        return HttpResponse::BadRequest().json(json!({"error": "invalid_grant"}));
    }
    HttpResponse::Ok().json(json!({"access_token": ACCESS_TOKEN, "token_type": "bearer"}))
}

/// Basic 인증만 허용하는 토큰 엔드포인트
async fn token_basic_only(req: HttpRequest, form: web::Form<HashMap<String, String>>) -> HttpResponse {
    if form.contains_key("client_secret") {
        return HttpResponse::BadRequest().json(json!({"error": "secret_in_body"}));
    }
    token(req, form).await
}

/// 200 이지만 JSON이 아닌 응답
async fn token_html() -> HttpResponse {
    HttpResponse::Ok().content_type("text/html").body("<html>maintenance</html>")
}

/// 200 이지만 토큰이 비어 있는 응답
async fn token_empty() -> HttpResponse {
    HttpResponse::Ok().json(json!({"access_token": ""}))
}

/// `{code, info}` 형식의 오류를 200으로 돌려주는 엔드포인트
async fn token_business_error() -> HttpResponse {
    HttpResponse::Ok().json(json!({"code": 40001, "info": "invalid app"}))
}

fn bearer_ok(req: &HttpRequest) -> bool {
    req.headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", ACCESS_TOKEN) || v == format!("token {}", ACCESS_TOKEN))
        .unwrap_or(false)
}

/// 범용 프로바이더 사용자 정보 (중첩 구조)
async fn userinfo(req: HttpRequest) -> HttpResponse {
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    HttpResponse::Ok().json(json!({
        "code": 0,
        "data": {
            "id": 1001,
            "name": "Kim Minsu",
            "emails": [{"address": "minsu@example.com"}]
        }
    }))
}

/// Google 형식 사용자 정보
async fn google_userinfo(req: HttpRequest) -> HttpResponse {
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    HttpResponse::Ok().json(json!({"sub": "1099", "email": "minsu@gmail.com", "email_verified": true}))
}

/// GitHub `/user`
async fn github_user(req: HttpRequest) -> HttpResponse {
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().json(json!({"message": "Bad credentials"}));
    }
    HttpResponse::Ok().json(json!({"id": 583231, "login": "octocat", "name": null}))
}

/// GitHub `/user/emails`
async fn github_emails(req: HttpRequest) -> HttpResponse {
    if !bearer_ok(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    HttpResponse::Ok().json(json!([
        {"email": "octo@work.example.com", "primary": false, "verified": true},
        {"email": "octocat@github.example.com", "primary": true, "verified": true}
    ]))
}

/// OIDC 디스커버리 문서. 자기 자신의 주소를 엔드포인트로 알려줍니다.
async fn discovery(req: HttpRequest) -> HttpResponse {
    let info = req.connection_info();
    let base = format!("{}://{}", info.scheme(), info.host());
    HttpResponse::Ok().json(json!({
        "issuer": base,
        "authorization_endpoint": format!("{}/oidc/authorize", base),
        "token_endpoint": format!("{}/oidc/token", base),
        "userinfo_endpoint": format!("{}/oidc/userinfo", base)
    }))
}

/// 가짜 프로바이더를 띄우고 `http://127.0.0.1:{port}` 를 반환합니다.
pub fn spawn_fake_provider() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/oauth/token", web::post().to(token))
            .route("/oauth/token-basic", web::post().to(token_basic_only))
            .route("/oauth/token-html", web::post().to(token_html))
            .route("/oauth/token-empty", web::post().to(token_empty))
            .route("/oauth/token-business-error", web::post().to(token_business_error))
            .route("/oauth/userinfo", web::get().to(userinfo))
            .route("/.well-known/openid-configuration", web::get().to(discovery))
            .route("/oidc/token", web::post().to(token))
            .route("/oidc/userinfo", web::get().to(userinfo))
            .route("/google/token", web::post().to(token))
            .route("/google/userinfo", web::get().to(google_userinfo))
            .route("/login/oauth/access_token", web::post().to(token))
            .route("/user", web::get().to(github_user))
            .route("/user/emails", web::get().to(github_emails))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake provider");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}
