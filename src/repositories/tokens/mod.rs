//! JWT 토큰 관리 리포지토리 모듈
//!
//! 세션 저장소를 사용하여 다음 기능을 제공합니다:
//!
//! # Features
//!
//! - **Refresh Token 관리**: 식별자별 리프레시 토큰 저장, 조회, 삭제
//! - **Access Token Blacklist**: 로그아웃된 토큰을 남은 수명 동안 거부
//!
//! # Usage
//!
//! ```rust,ignore
//! let token_repo = TokenRepository::new(store.clone());
//!
//! token_repo.store_refresh_token("a@x.com", &refresh_token, Duration::from_secs(86400)).await?;
//! token_repo.blacklist_token(&access_token, remaining).await?;
//! ```

pub mod token_repository;

pub use token_repository::*;
