//! HTTP 미들웨어
//!
//! - [`AuthMiddleware`] - Bearer 액세스 토큰 검증 후 요청 컨텍스트 설정
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/me")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::artists::my_artists)
//! );
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
