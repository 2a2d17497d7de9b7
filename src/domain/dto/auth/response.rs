//! 인증 응답 DTO
use serde::Serialize;
use crate::domain::entities::users::Role;

/// 로그인 응답
///
/// 리프레시 토큰은 재발급 요청 시 서버 저장값과 비교되므로 클라이언트에 전달합니다.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user_seq: i64,
    pub nickname: String,
    pub profile_img: String,
    pub role: Role,
    /// 액세스 토큰
    pub token: String,
    /// 액세스 토큰 만료 시각 (epoch 밀리초)
    pub expiration: i64,
    pub refresh_token: String,
}

/// 액세스 토큰 재발급 응답
#[derive(Debug, Clone, Serialize)]
pub struct ReissueResponse {
    pub token: String,
    /// 만료 시각 (epoch 밀리초)
    pub expiration: i64,
}
