//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 생성자로 협력 객체를 주입받고, `main`에서 한 번 조립되어
//! `web::Data`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::AuthService, users::UserService};
//!
//! let auth = web::Data::new(AuthService::new(verifier, tokens, store, code_sender, ttl));
//! let users = web::Data::new(UserService::new(my_artist_repo));
//! ```

pub mod users;
pub mod auth;
pub mod mail;
