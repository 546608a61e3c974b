use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;
use subtle::ConstantTimeEq;

/// 관리자 토큰 검사 결과
#[derive(Debug, PartialEq, Eq)]
pub enum AdminCheck {
    Allowed,
    /// 헤더가 없거나 토큰 불일치
    Unauthorized,
    /// `ADMIN_API_TOKEN` 미설정
    Disabled,
}

/// `Authorization` 헤더 값을 기대 토큰과 비교합니다.
pub fn check_admin_header(header: Option<&str>, expected: Option<&str>) -> AdminCheck {
    let Some(expected) = expected else {
        return AdminCheck::Disabled;
    };

    match header.and_then(|value| value.strip_prefix("Bearer ")) {
        Some(token) if tokens_match(token.trim(), expected) => AdminCheck::Allowed,
        _ => AdminCheck::Unauthorized,
    }
}

/// 길이가 다르면 바로 거절하고, 같으면 상수 시간으로 비교합니다.
fn tokens_match(submitted: &str, expected: &str) -> bool {
    submitted.len() == expected.len() && bool::from(submitted.as_bytes().ct_eq(expected.as_bytes()))
}

pub struct AdminTokenMiddlewareService<S> {
    pub service: Rc<S>,
    pub expected_token: Option<Rc<str>>,
}

impl<S, B> Service<ServiceRequest> for AdminTokenMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let expected = self.expected_token.clone();

        Box::pin(async move {
            let header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok());

            let rejection = match check_admin_header(header, expected.as_deref()) {
                AdminCheck::Allowed => None,
                AdminCheck::Unauthorized => {
                    log::warn!("관리자 API 인증 실패: {}", req.path());
                    Some(HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "관리자 토큰이 필요합니다"
                    })))
                }
                AdminCheck::Disabled => {
                    log::warn!("ADMIN_API_TOKEN 미설정으로 관리자 API 거부: {}", req.path());
                    Some(HttpResponse::Forbidden().json(serde_json::json!({
                        "error": "관리자 API가 비활성화되어 있습니다"
                    })))
                }
            };

            if let Some(response) = rejection {
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_admin_header() {
        assert_eq!(check_admin_header(Some("Bearer t0k"), Some("t0k")), AdminCheck::Allowed);
        assert_eq!(check_admin_header(Some("Bearer other"), Some("t0k")), AdminCheck::Unauthorized);
        assert_eq!(check_admin_header(Some("t0k"), Some("t0k")), AdminCheck::Unauthorized);
        assert_eq!(check_admin_header(None, Some("t0k")), AdminCheck::Unauthorized);
        assert_eq!(check_admin_header(Some("Bearer t0k"), None), AdminCheck::Disabled);
    }

    #[test]
    fn test_tokens_match() {
        assert!(tokens_match("admin-token", "admin-token"));
        assert!(!tokens_match("admin-tokem", "admin-token"));
        assert!(!tokens_match("admin", "admin-token"));
        assert!(!tokens_match("", "admin-token"));
        assert_eq!(check_admin_header(Some("Bearer  t0k "), Some("t0k")), AdminCheck::Allowed);
        assert_eq!(check_admin_header(Some("Bearer t0"), Some("t0k")), AdminCheck::Unauthorized);
    }
}
