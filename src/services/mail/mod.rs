//! 인증 코드 메일 발송 모듈
//!
//! [`AuthService`](crate::services::auth::AuthService)는 [`VerificationCodeSender`]로만
//! 코드를 전달합니다. 운영에서는 메일 릴레이로 HTTP 요청을 보내고,
//! 릴레이가 없는 개발 환경에서는 로그로 남깁니다.
//!
//! ```rust,ignore
//! let sender: Arc<dyn VerificationCodeSender> = match MailConfig::relay_url() {
//!     Some(url) => Arc::new(MailRelaySender::new(url)),
//!     None => Arc::new(LogCodeSender),
//! };
//! ```

pub mod code_sender;

pub use code_sender::*;
