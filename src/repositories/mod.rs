//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 모든 리포지토리는 생성자로 저장소 핸들을 주입받습니다.
//!
//! - [`tokens`] - 리프레시 토큰, 로그아웃 블랙리스트 (세션 저장소)
//! - [`verification`] - 이메일 인증 코드 (세션 저장소)
//! - [`users`] - 사용자 (MongoDB)
//! - [`artists`] - 즐겨찾기 아티스트 (MongoDB)

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub mod tokens;
pub mod verification;
pub mod users;
pub mod artists;

/// 세션 저장소 키에 쓰이는 식별자 인코딩 (표준 base64, 패딩 포함)
pub(crate) fn encode_identity(identity: &str) -> String {
    STANDARD.encode(identity.as_bytes())
}
