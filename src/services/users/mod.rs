//! 사용자 관련 서비스 모듈
//!
//! # Features
//!
//! - 자격 증명 검증 (bcrypt 해시 비교)
//! - 즐겨찾기 아티스트 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! let verifier = UserCredentialVerifier::new(user_repo.clone());
//! let principal = verifier.verify_credentials("user@example.com", "password").await?;
//! ```

pub mod credential_verifier;
pub mod user_service;

pub use credential_verifier::*;
pub use user_service::*;
