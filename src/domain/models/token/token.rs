//! JWT 토큰 클레임과 발급 결과
//!
//! 액세스 토큰과 리프레시 토큰은 같은 클레임 구조를 쓰고 `kind`로 구분합니다.
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::Role;
use crate::domain::models::auth::Principal;

/// 토큰 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (이메일)
/// - `uid`: 사용자 순번
/// - `nickname`, `profile_img`, `role`, `authorized`: 주체 스냅샷
/// - `kind`: 액세스 / 리프레시 구분
/// - `jti`: 토큰 고유 ID (UUID v4)
/// - `iat`, `exp`: 발급/만료 시간 (Unix timestamp, 초)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub uid: i64,
    pub nickname: String,
    pub profile_img: String,
    pub role: Role,
    pub authorized: bool,
    pub kind: TokenKind,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// 클레임에서 주체를 복원합니다.
    pub fn principal(&self) -> Principal {
        Principal {
            user_seq: self.uid,
            email: self.sub.clone(),
            nickname: self.nickname.clone(),
            profile_img: self.profile_img.clone(),
            role: self.role,
            is_authorized: self.authorized,
        }
    }
}

/// 발급된 토큰과 만료 시각
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// 만료 시각 (epoch 밀리초)
    pub expires_at: i64,
}
