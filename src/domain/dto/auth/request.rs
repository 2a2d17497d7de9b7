//! 인증 요청관련 DTO
//!
//! 인증을 요청하는 사용자들의 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;
use crate::domain::models::auth::Credentials;

/// 로그인 요청 구조체
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl From<LoginRequest> for Credentials {
    fn from(request: LoginRequest) -> Self {
        Credentials::new(request.email, request.password)
    }
}

/// 액세스 토큰 재발급 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct ReissueRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// 인증 코드 발송 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct EmailCodeRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 이메일 인증 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct EmailVerifyRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "인증 코드를 입력해주세요"))]
    pub code: String,
}

/// 비밀번호 재확인 요청 구조체
#[derive(Deserialize, Validate)]
pub struct PasswordCheckRequest {
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest { email: "a@x.com".to_string(), password: "pw".to_string() };
        assert!(ok.validate().is_ok());

        let bad_email = LoginRequest { email: "not-an-email".to_string(), password: "pw".to_string() };
        assert!(bad_email.validate().is_err());

        let empty_password = LoginRequest { email: "a@x.com".to_string(), password: String::new() };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_email_verify_request_requires_code() {
        let request = EmailVerifyRequest { email: "a@x.com".to_string(), code: String::new() };
        assert!(request.validate().is_err());
    }
}
