//! HTTP 요청 핸들러
//!
//! - [`auth`] - 로그인, 로그아웃, 재발급, 이메일 인증, 비밀번호 재확인
//! - [`artists`] - 즐겨찾기 아티스트 조회

pub mod auth;
pub mod artists;
