//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 액세스 토큰을 검증하고,
//! 성공 시 [`RequestContext`](crate::domain::models::auth::RequestContext)를
//! Request Extensions에 넣습니다. 실패 시 401 응답으로 요청을 끝냅니다.
//!
//! 미들웨어는 `web::Data<AuthService>`가 앱에 등록되어 있어야 동작합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse};
    use crate::domain::models::auth::RequestContext;
    use crate::test_support::{auth_service, sample_principal};

    #[get("/whoami")]
    async fn whoami(ctx: RequestContext) -> HttpResponse {
        HttpResponse::Ok().body(ctx.current_identity().unwrap_or_default().to_string())
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let (service, _store) = auth_service();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .service(web::scope("").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_token_populates_context() {
        let (service, _store) = auth_service();
        let access = service.token_service().issue_access_token(&sample_principal()).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .service(web::scope("").wrap(AuthMiddleware::required()).service(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", access.token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body.as_ref(), b"a@x.com");
    }
}
