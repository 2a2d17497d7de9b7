//! 인증 및 세션 서비스 모듈
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 발급과 검증 ([`TokenService`])
//! - 로그인, 로그아웃, 재발급, 이메일 인증, 비밀번호 재확인 ([`AuthService`])
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 식별자당 하나의 리프레시 토큰, 재발급 시 정확히 일치해야 함
//! - 로그아웃된 액세스 토큰은 남은 수명 동안 블랙리스트
//!
//! # Examples
//!
//! ```rust,ignore
//! let tokens = Arc::new(TokenService::new(JwtSettings::from_env()));
//! let auth = AuthService::new(verifier, tokens, store, code_sender, Duration::from_secs(300));
//!
//! let mut ctx = RequestContext::anonymous();
//! let login = auth.login(Credentials::new(email, password), &mut ctx).await?;
//! ```

pub mod token_service;
pub mod auth_service;

pub use token_service::*;
pub use auth_service::*;
