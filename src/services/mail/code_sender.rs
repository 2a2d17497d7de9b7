//! 인증 코드 전달 수단

use async_trait::async_trait;
use serde::Serialize;
use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait VerificationCodeSender: Send + Sync {
    /// 발급된 인증 코드를 메일 주소의 소유자에게 전달합니다.
    async fn send_code(&self, email: &str, code: &str) -> AppResult<()>;
}

#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    to: &'a str,
    code: &'a str,
}

/// 메일 릴레이 엔드포인트로 `{ "to", "code" }`를 POST합니다.
pub struct MailRelaySender {
    client: reqwest::Client,
    endpoint: String,
}

impl MailRelaySender {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl VerificationCodeSender for MailRelaySender {
    async fn send_code(&self, email: &str, code: &str) -> AppResult<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RelayPayload { to: email, code })
            .send()
            .await
            .map_err(|e| AppError::InternalError(format!("메일 릴레이 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::InternalError(format!(
                "메일 릴레이 응답 오류 ({}): {}", status, error_text
            )));
        }

        log::debug!("인증 코드 메일 요청 완료: {}", email);
        Ok(())
    }
}

/// 개발용. 코드를 로그로만 남깁니다.
pub struct LogCodeSender;

#[async_trait]
impl VerificationCodeSender for LogCodeSender {
    async fn send_code(&self, email: &str, code: &str) -> AppResult<()> {
        log::info!("📧 [dev] 인증 코드 - 이메일: {}, 코드: {}", email, code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_payload_shape() {
        let payload = RelayPayload { to: "a@x.com", code: "042137" };
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value, serde_json::json!({ "to": "a@x.com", "code": "042137" }));
    }

    #[actix_web::test]
    async fn test_relay_unreachable_is_error() {
        let sender = MailRelaySender::new("http://127.0.0.1:9/mail");

        let result = sender.send_code("a@x.com", "042137").await;
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[actix_web::test]
    async fn test_log_sender_accepts_code() {
        assert!(LogCodeSender.send_code("a@x.com", "042137").await.is_ok());
    }
}
