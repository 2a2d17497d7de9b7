//! Authentication HTTP Handlers
//!
//! 세션/토큰 수명주기 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 비즈니스 규칙은 [`AuthService`]에 있고, 핸들러는 입력 검증과 응답 변환만 합니다.
//!
//! # Endpoints
//!
//! - `POST /auth/login` - 로그인
//! - `POST /auth/logout` - 로그아웃 (Bearer 필요)
//! - `POST /auth/reissue` - 액세스 토큰 재발급
//! - `POST /auth/email/code` - 이메일 인증 코드 발급
//! - `POST /auth/email/verify` - 이메일 인증
//! - `POST /auth/password/check` - 비밀번호 재확인 (Bearer 필요)
use actix_web::{post, web, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::domain::dto::auth::{
    EmailCodeRequest, EmailVerifyRequest, LoginRequest, PasswordCheckRequest, ReissueRequest,
};
use crate::domain::models::auth::RequestContext;
use crate::errors::{AppError, AppResult};
use crate::services::auth::AuthService;

fn validate<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))
}

#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let mut ctx = RequestContext::anonymous();
    let response = auth.login(payload.into_inner().into(), &mut ctx).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/logout")]
pub async fn logout(
    auth: web::Data<AuthService>,
    mut ctx: RequestContext,
) -> Result<HttpResponse, AppError> {
    let token = ctx
        .access_token()
        .map(str::to_string)
        .ok_or_else(|| AppError::AuthenticationError("액세스 토큰이 없습니다".to_string()))?;

    auth.logout(&token, &mut ctx).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "로그아웃되었습니다" })))
}

#[post("/reissue")]
pub async fn reissue(
    auth: web::Data<AuthService>,
    payload: web::Json<ReissueRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let mut ctx = RequestContext::anonymous();
    let response = auth.reissue(&payload.refresh_token, &mut ctx).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 인증 코드는 응답에 포함하지 않고 메일로만 전달합니다.
#[post("/email/code")]
pub async fn issue_email_code(
    auth: web::Data<AuthService>,
    payload: web::Json<EmailCodeRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    auth.issue_verification_code(&payload.email).await?;

    Ok(HttpResponse::Accepted().json(json!({ "message": "인증 코드가 발급되었습니다" })))
}

#[post("/email/verify")]
pub async fn verify_email(
    auth: web::Data<AuthService>,
    payload: web::Json<EmailVerifyRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    auth.verify_email(&payload.email, &payload.code).await?;

    Ok(HttpResponse::Ok().json(json!({ "verified": true })))
}

#[post("/password/check")]
pub async fn check_password(
    auth: web::Data<AuthService>,
    ctx: RequestContext,
    payload: web::Json<PasswordCheckRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    auth.check_password(&payload.password, &ctx).await?;

    Ok(HttpResponse::Ok().json(json!({ "matched": true })))
}
