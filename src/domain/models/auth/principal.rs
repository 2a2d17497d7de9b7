//! 인증 주체와 자격 증명
//!
//! [`Principal`]은 인증이 끝난 사용자의 불변 스냅샷이며 비밀번호를 갖지 않습니다.
//! 평문 비밀번호는 [`Credentials`]에만 존재하고, 로그인 시 소비됩니다.

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{Role, User};

/// 인증된 사용자 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// 사용자 순번
    pub user_seq: i64,
    /// 식별자 (이메일)
    pub email: String,
    pub nickname: String,
    pub profile_img: String,
    pub role: Role,
    pub is_authorized: bool,
}

impl Principal {
    /// 세션 저장소 키와 토큰 `sub` 클레임에 쓰이는 식별자
    pub fn identity(&self) -> &str {
        &self.email
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            user_seq: user.id,
            email: user.email.clone(),
            nickname: user.nickname.clone(),
            profile_img: user.profile_img.clone(),
            role: user.role,
            is_authorized: user.is_authorized,
        }
    }
}

/// 로그인 자격 증명
///
/// `Debug` 출력에서 비밀번호는 가려집니다.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
