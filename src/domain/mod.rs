//! 도메인 계층
//!
//! - [`entities`] - MongoDB에 저장되는 엔티티
//! - [`models`] - 인증 주체, 요청 컨텍스트, 토큰 클레임
//! - [`dto`] - HTTP 요청/응답 구조체

pub mod entities;
pub mod dto;
pub mod models;
