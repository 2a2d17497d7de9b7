//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::RequestContext;
use crate::errors::{AppError, AppResult};
use crate::services::auth::AuthService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
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

        Box::pin(async move {
            match authenticate_request(&req).await {
                Ok(ctx) => {
                    log::debug!("인증 성공: {}", ctx.current_identity().unwrap_or_default());
                    // 요청 컨텍스트를 Request Extensions에 저장
                    req.extensions_mut().insert(ctx);
                }
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

async fn authenticate_request(req: &ServiceRequest) -> AppResult<RequestContext> {
    let auth_service = req
        .app_data::<web::Data<AuthService>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("AuthService가 등록되지 않았습니다".to_string()))?;

    // Authorization 헤더 추출
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    // Bearer 토큰 추출
    let token = auth_service.token_service().extract_bearer_token(auth_header)?;

    // 서명/만료 검증 및 블랙리스트 확인
    let principal = auth_service.authorize(token).await?;

    Ok(RequestContext::authenticated(principal, token))
}
