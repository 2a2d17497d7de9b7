//! 자격 증명 검증기
//!
//! 세션 오케스트레이터는 [`CredentialVerifier`] trait으로만 자격 증명을 확인합니다.
//! 운영 구현 [`UserCredentialVerifier`]는 `user` 컬렉션을 조회하고 bcrypt 해시를 비교합니다.

use std::sync::Arc;
use async_trait::async_trait;
use thiserror::Error;
use crate::domain::entities::users::User;
use crate::domain::models::auth::Principal;
use crate::repositories::users::UserRepository;

/// 자격 증명 검증 실패 사유
///
/// 사유는 서버 로그에만 남기고 클라이언트에는 단일 에러 코드로 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthFailure {
    #[error("unknown account")]
    UnknownAccount,

    #[error("bad credentials")]
    BadCredentials,

    #[error("credential backend unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// 식별자와 비밀번호를 검증하고 인증 주체를 돌려줍니다.
    async fn verify_credentials(&self, identity: &str, secret: &str) -> Result<Principal, AuthFailure>;
}

pub struct UserCredentialVerifier {
    user_repo: Arc<UserRepository>,
}

impl UserCredentialVerifier {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl CredentialVerifier for UserCredentialVerifier {
    async fn verify_credentials(&self, identity: &str, secret: &str) -> Result<Principal, AuthFailure> {
        let user = self
            .user_repo
            .find_by_email(identity)
            .await
            .map_err(|e| AuthFailure::Unavailable(e.to_string()))?
            .ok_or(AuthFailure::UnknownAccount)?;

        match_password(&user, secret)
    }
}

/// 저장된 bcrypt 해시와 비밀번호를 비교합니다.
pub(crate) fn match_password(user: &User, secret: &str) -> Result<Principal, AuthFailure> {
    let verify_start = std::time::Instant::now();
    let is_valid = bcrypt::verify(secret, &user.password)
        .map_err(|e| AuthFailure::Unavailable(format!("비밀번호 검증 실패: {}", e)))?;
    log::debug!("Password verification took: {:?}", verify_start.elapsed());

    if !is_valid {
        return Err(AuthFailure::BadCredentials);
    }

    Ok(Principal::from(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;

    fn user_with_password(password: &str) -> User {
        User {
            id: 11,
            email: "a@x.com".to_string(),
            password: bcrypt::hash(password, 4).unwrap(),
            nickname: "banana".to_string(),
            profile_img: "default_profile_1.png".to_string(),
            artist_like_count: 0,
            role: Role::User,
            is_authorized: true,
        }
    }

    #[test]
    fn test_match_password_success() {
        let user = user_with_password("correct horse");

        let principal = match_password(&user, "correct horse").unwrap();
        assert_eq!(principal.user_seq, 11);
        assert_eq!(principal.email, "a@x.com");
    }

    #[test]
    fn test_match_password_wrong() {
        let user = user_with_password("correct horse");

        assert_eq!(match_password(&user, "battery staple"), Err(AuthFailure::BadCredentials));
    }

    #[test]
    fn test_match_password_corrupt_hash() {
        let mut user = user_with_password("pw");
        user.password = "not-a-bcrypt-hash".to_string();

        assert!(matches!(match_password(&user, "pw"), Err(AuthFailure::Unavailable(_))));
    }
}
