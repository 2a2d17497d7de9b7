//! 이메일 인증 코드 저장소
//!
//! 키 형식: `AC:<base64(이메일)>` → 인증 코드

use std::sync::Arc;
use std::time::Duration;
use crate::caching::SessionStore;
use crate::errors::AppResult;
use crate::repositories::encode_identity;

const VERIFICATION_CODE_PREFIX: &str = "AC:";

#[derive(Clone)]
pub struct VerificationRepository {
    store: Arc<dyn SessionStore>,
}

impl VerificationRepository {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn code_key(email: &str) -> String {
        format!("{}{}", VERIFICATION_CODE_PREFIX, encode_identity(email))
    }

    pub async fn store_code(&self, email: &str, code: &str, ttl: Duration) -> AppResult<()> {
        self.store.set(&Self::code_key(email), code, ttl).await
    }

    pub async fn find_code(&self, email: &str) -> AppResult<Option<String>> {
        self.store.get(&Self::code_key(email)).await
    }

    pub async fn delete_code(&self, email: &str) -> AppResult<()> {
        self.store.delete(&Self::code_key(email)).await
    }
}
