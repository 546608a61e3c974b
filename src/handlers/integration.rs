//! 시스템 연동 관리자 핸들러
//!
//! `AdminTokenMiddleware` 뒤에 등록됩니다.

use actix_web::{get, post, web, HttpResponse};

use crate::domain::dto::integrations::OAuth2ConfigRequest;
use crate::errors::errors::AppError;
use crate::services::integration::IntegrationService;

/// 범용 OAuth2 프로바이더 설정 조회
///
/// # Endpoint
/// `GET /admin/api/gaia/system/oauth2`
#[get("/oauth2")]
pub async fn get_oauth2_config() -> Result<HttpResponse, AppError> {
    let response = IntegrationService::instance().get_oauth2_config().await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 범용 OAuth2 프로바이더 설정 저장 또는 연결 테스트
///
/// # Endpoint
/// `POST /admin/api/gaia/system/oauth2`
#[post("/oauth2")]
pub async fn set_oauth2_config(
    payload: web::Json<OAuth2ConfigRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    log::info!("OAuth2 설정 변경 요청: status={}, test={}", request.status, request.test);

    let view = IntegrationService::instance().set_oauth2_config(request).await?;
    Ok(HttpResponse::Ok().json(view))
}
