//! 관리자 API 토큰 미들웨어
//!
//! `Authorization: Bearer {ADMIN_API_TOKEN}` 헤더가 있는 요청만 통과시킵니다.
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/admin/api/gaia/system")
//!         .wrap(AdminTokenMiddleware::from_env())
//!         .service(handlers::integration::get_oauth2_config)
//! );
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::config::AdminConfig;
use crate::middlewares::admin_inner::AdminTokenMiddlewareService;

pub struct AdminTokenMiddleware {
    expected_token: Option<Rc<str>>,
}

impl AdminTokenMiddleware {
    /// `None`이면 관리자 API가 비활성화되어 모든 요청을 거부합니다.
    pub fn new(expected_token: Option<String>) -> Self {
        Self {
            expected_token: expected_token.map(Rc::from),
        }
    }

    pub fn from_env() -> Self {
        Self::new(AdminConfig::api_token())
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminTokenMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AdminTokenMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminTokenMiddlewareService {
            service: Rc::new(service),
            expected_token: self.expected_token.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().body("ok")
    }

    #[actix_web::test]
    async fn test_valid_token_passes() {
        let app = test::init_service(
            App::new()
                .wrap(AdminTokenMiddleware::new(Some("admin-secret".to_string())))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Authorization", "Bearer admin-secret"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_missing_or_wrong_token_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .wrap(AdminTokenMiddleware::new(Some("admin-secret".to_string())))
                .route("/", web::get().to(ok)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Authorization", "Bearer nope"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_unconfigured_token_rejects_everything() {
        let app = test::init_service(
            App::new()
                .wrap(AdminTokenMiddleware::new(None))
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("Authorization", "Bearer anything"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }
}
