//! 요청/응답 DTO
//!
//! - [`auth`] - 로그인, 로그아웃, 재발급, 이메일 인증, 비밀번호 재확인
//! - [`artists`] - 즐겨찾기 아티스트 목록

pub mod auth;
pub mod artists;
