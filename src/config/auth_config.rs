//! # Authentication Configuration Module
//!
//! JWT 토큰과 이메일 인증 코드 관련 설정을 관리하는 모듈입니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_ACCESS_EXPIRATION_MINUTES="30"
//! export JWT_REFRESH_EXPIRATION_DAYS="14"
//! export EMAIL_CODE_EXPIRATION_MINUTES="5"
//! export MAIL_RELAY_URL="http://mailer.internal/v1/verification"
//! ```

use std::env;

pub struct JwtConfig;

impl JwtConfig {
    /// HS256 서명 비밀키
    ///
    /// 설정되지 않은 경우 개발용 기본값을 사용하고 경고를 남깁니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "banana-local-secret-key".to_string()
            })
    }

    /// 액세스 토큰 유효 시간 (분)
    pub fn access_expiration_minutes() -> i64 {
        env::var("JWT_ACCESS_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }

    /// 리프레시 토큰 유효 기간 (일)
    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "14".to_string())
            .parse()
            .unwrap_or(14)
    }
}

pub struct VerificationConfig;

impl VerificationConfig {
    /// 이메일 인증 코드 유효 시간 (분)
    pub fn code_expiration_minutes() -> u64 {
        env::var("EMAIL_CODE_EXPIRATION_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|m| *m > 0)
            .unwrap_or(5)
    }
}

pub struct MailConfig;

impl MailConfig {
    /// 인증 코드 메일 릴레이 주소. 비어 있으면 `None`.
    pub fn relay_url() -> Option<String> {
        Self::parse_relay_url(env::var("MAIL_RELAY_URL").ok().as_deref())
    }

    pub fn parse_relay_url(value: Option<&str>) -> Option<String> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_defaults() {
        if env::var("JWT_ACCESS_EXPIRATION_MINUTES").is_err() {
            assert_eq!(JwtConfig::access_expiration_minutes(), 30);
        }
        if env::var("JWT_REFRESH_EXPIRATION_DAYS").is_err() {
            assert_eq!(JwtConfig::refresh_expiration_days(), 14);
        }
    }

    #[test]
    fn test_verification_default() {
        if env::var("EMAIL_CODE_EXPIRATION_MINUTES").is_err() {
            assert_eq!(VerificationConfig::code_expiration_minutes(), 5);
        }
    }

    #[test]
    fn test_mail_relay_url_parsing() {
        assert_eq!(MailConfig::parse_relay_url(None), None);
        assert_eq!(MailConfig::parse_relay_url(Some("  ")), None);
        assert_eq!(
            MailConfig::parse_relay_url(Some(" http://mailer/v1 ")).as_deref(),
            Some("http://mailer/v1")
        );
    }
}
