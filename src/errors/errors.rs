//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 세션/토큰 수명주기 처리에서 발생하는 에러를 하나의 열거형으로 통합합니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 각 에러 종류를
//! 안정적인 에러 코드와 HTTP 상태 코드로 변환합니다.
//!
//! ## 에러 코드
//!
//! | 종류 | 코드 | HTTP |
//! |------|------|------|
//! | 로그인 실패 | `LOGIN_FAILED` | 401 |
//! | 사용자 없음 | `USER_NOT_FOUND` | 404 |
//! | 비밀번호 불일치 | `PASSWORD_MISMATCH` | 400 |
//! | 리프레시 토큰 무효 | `REFRESH_TOKEN_INVALID` | 401 |
//! | 인증 코드 만료 | `VERIFICATION_EXPIRED` | 400 |
//! | 인증 코드 불일치 | `VERIFICATION_CODE_MISMATCH` | 400 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn check(ctx: &RequestContext) -> AppResult<String> {
//!     let identity = ctx.current_identity().ok_or(AppError::UserNotFound)?;
//!     Ok(identity.to_string())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 도메인 에러(로그인 실패, 토큰 무효 등)는 페이로드 없이 코드만 가지며,
/// 인프라 에러는 로그용 메시지를 함께 보관합니다.
/// 인프라 에러 메시지는 클라이언트 응답에 노출되지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 자격 증명 검증 실패 (401 Unauthorized)
    #[error("Login failed")]
    LoginFailed,

    /// 요청 컨텍스트에 인증된 사용자가 없음 (404 Not Found)
    #[error("User not found")]
    UserNotFound,

    /// 비밀번호 재확인 실패 (400 Bad Request)
    #[error("Password does not match")]
    PasswordMismatch,

    /// 리프레시 토큰이 없거나, 해석할 수 없거나, 저장된 값과 다름 (401 Unauthorized)
    #[error("Refresh token is invalid")]
    RefreshTokenInvalid,

    /// 인증 코드가 없거나 만료됨 (400 Bad Request)
    #[error("Verification code expired")]
    VerificationExpired,

    /// 인증 코드 불일치 (400 Bad Request)
    #[error("Verification code does not match")]
    VerificationCodeMismatch,

    /// 액세스 토큰 인증 실패 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에 노출되는 안정적인 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::LoginFailed => "LOGIN_FAILED",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::PasswordMismatch => "PASSWORD_MISMATCH",
            AppError::RefreshTokenInvalid => "REFRESH_TOKEN_INVALID",
            AppError::VerificationExpired => "VERIFICATION_EXPIRED",
            AppError::VerificationCodeMismatch => "VERIFICATION_CODE_MISMATCH",
            AppError::AuthenticationError(_) => "AUTHENTICATION_FAILED",
            AppError::ValidationError(_) => "VALIDATION_FAILED",
            AppError::RedisError(_)
            | AppError::DatabaseError(_)
            | AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// 응답 본문에 들어갈 메시지
    ///
    /// 인프라 에러는 내부 정보를 숨기고 고정 문구를 돌려줍니다.
    fn public_message(&self) -> String {
        match self {
            AppError::RedisError(_) | AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::LoginFailed
            | AppError::RefreshTokenInvalid
            | AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::PasswordMismatch
            | AppError::VerificationExpired
            | AppError::VerificationCodeMismatch
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 인프라 에러는 여기서 한 번 로그로 남기고 클라이언트에는 일반 메시지만 보냅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if matches!(
            self,
            AppError::RedisError(_) | AppError::DatabaseError(_) | AppError::InternalError(_)
        ) {
            log::error!("요청 처리 중 내부 에러 발생: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "success": false,
                "code": self.code(),
                "message": self.public_message()
            }))
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::RedisError(err.to_string())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_domain_error_status_codes() {
        assert_eq!(AppError::LoginFailed.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::UserNotFound.error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::PasswordMismatch.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::RefreshTokenInvalid.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::VerificationExpired.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::VerificationCodeMismatch.error_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(AppError::LoginFailed.code(), "LOGIN_FAILED");
        assert_eq!(AppError::UserNotFound.code(), "USER_NOT_FOUND");
        assert_eq!(AppError::PasswordMismatch.code(), "PASSWORD_MISMATCH");
        assert_eq!(AppError::RefreshTokenInvalid.code(), "REFRESH_TOKEN_INVALID");
        assert_eq!(AppError::VerificationExpired.code(), "VERIFICATION_EXPIRED");
        assert_eq!(AppError::VerificationCodeMismatch.code(), "VERIFICATION_CODE_MISMATCH");
    }

    #[test]
    fn test_infrastructure_errors_hide_details() {
        let error = AppError::RedisError("connection refused at 10.0.0.3".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.code(), "INTERNAL_ERROR");
        assert_eq!(error.public_message(), "Internal server error");
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid token".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
