//! 바나나 인증 서비스 백엔드
//!
//! 즐겨찾기 아티스트 플랫폼의 세션/토큰 수명주기를 담당하는 서비스입니다.
//!
//! # Features
//!
//! - **로그인/로그아웃**: 액세스/리프레시 토큰 발급, 로그아웃 토큰 블랙리스트
//! - **토큰 재발급**: 서버에 저장된 리프레시 토큰과 정확히 일치할 때만 허용
//! - **이메일 인증**: 1회용 인증 코드 발급(메일 릴레이 전달)과 확인
//! - **비밀번호 재확인**: 민감한 작업 전 본인 확인
//! - **MongoDB**: 사용자, 즐겨찾기 아티스트 저장
//! - **Redis**: TTL 기반 세션 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 입력 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AuthService, TokenService, CredentialVerifier
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 토큰, 인증 코드, 사용자, 즐겨찾기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod test_support;
