//! 서드파티 로그인 핸들러
//!
//! | Method | Path | 설명 |
//! |--------|------|------|
//! | GET | `/console/api/oauth/login/{provider}` | 인가 URL로 302 리다이렉트 |
//! | GET | `/console/api/oauth/authorize/{provider}` | 콜백 처리 후 사용자 정보 반환 |
//! | GET | `/api/oauth2/sso/url` | 웹앱 로그인용 SSO URL |

use actix_web::{get, http::header, web, HttpResponse};

use crate::config::AuthProvider;
use crate::domain::dto::oauth::{LoginQuery, OAuthCallbackQuery, SsoUrlQuery};
use crate::errors::errors::AppError;
use crate::services::oauth::OAuthLoginService;

fn parse_provider(raw: &str) -> Result<AuthProvider, AppError> {
    AuthProvider::from_str(raw).map_err(AppError::NotFound)
}

/// 로그인 시작
///
/// # Endpoint
/// `GET /console/api/oauth/login/{provider}?invite_token={token}`
#[get("/login/{provider}")]
pub async fn oauth_login(
    provider: web::Path<String>,
    query: web::Query<LoginQuery>,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&provider)?;
    let url = OAuthLoginService::instance()
        .login_url(provider, query.invite_token.as_deref())
        .await?;

    log::debug!("{} 로그인 리다이렉트", provider.as_str());
    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, url))
        .finish())
}

/// 프로바이더 콜백
///
/// # Endpoint
/// `GET /console/api/oauth/authorize/{provider}?code={code}&state={state}`
#[get("/authorize/{provider}")]
pub async fn oauth_authorize(
    provider: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&provider)?;
    let query = query.into_inner();

    // 사용자가 거부했거나 프로바이더 오류
    if let Some(error) = &query.error {
        let message = query
            .error_description
            .clone()
            .unwrap_or_else(|| format!("{} 인증이 취소되었거나 실패했습니다", provider.as_str()));
        log::warn!("{} OAuth 에러: {} - {}", provider.as_str(), error, message);
        return Err(AppError::AuthenticationError(message));
    }

    let code = query
        .code
        .ok_or_else(|| AppError::ValidationError("Authorization code가 필요합니다".to_string()))?;

    let response = OAuthLoginService::instance()
        .authorize(provider, &code, query.state)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 웹앱 SSO URL
///
/// # Endpoint
/// `GET /api/oauth2/sso/url?app_code={code}&redirect_url={url}`
#[get("/url")]
pub async fn oauth2_sso_url(query: web::Query<SsoUrlQuery>) -> Result<HttpResponse, AppError> {
    let app_code = query
        .app_code
        .as_deref()
        .ok_or_else(|| AppError::ValidationError("app_code is required".to_string()))?;

    let response = OAuthLoginService::instance()
        .sso_url(app_code, query.redirect_url.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
