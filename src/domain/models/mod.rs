//! 도메인 모델
//!
//! 영속되지 않는 인증 관련 값 타입들입니다.
//!
//! - [`auth`] - 인증 주체, 자격 증명, 요청 컨텍스트
//! - [`token`] - JWT 클레임과 발급 결과

pub mod auth;
pub mod token;
