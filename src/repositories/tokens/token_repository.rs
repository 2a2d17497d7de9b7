//! 리프레시 토큰과 로그아웃 블랙리스트 저장소
//!
//! ## 키 형식
//!
//! - 리프레시 토큰: `RT:<base64(식별자)>` → 토큰 원문
//! - 블랙리스트: `BL:<sha256-hex(액세스 토큰)>` → 토큰 원문
//!
//! 식별자당 리프레시 토큰은 하나만 유지되며, 새 로그인이 이전 값을 덮어씁니다.

use std::sync::Arc;
use std::time::Duration;
use sha2::{Digest, Sha256};
use crate::caching::SessionStore;
use crate::errors::AppResult;
use crate::repositories::encode_identity;

const REFRESH_TOKEN_PREFIX: &str = "RT:";
const BLACKLIST_PREFIX: &str = "BL:";

#[derive(Clone)]
pub struct TokenRepository {
    store: Arc<dyn SessionStore>,
}

impl TokenRepository {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn refresh_token_key(identity: &str) -> String {
        format!("{}{}", REFRESH_TOKEN_PREFIX, encode_identity(identity))
    }

    /// 토큰 원문 대신 SHA-256 해시를 키로 사용합니다.
    pub fn blacklist_key(access_token: &str) -> String {
        format!("{}{:x}", BLACKLIST_PREFIX, Sha256::digest(access_token.as_bytes()))
    }

    /// 리프레시 토큰을 저장합니다. 기존 값은 덮어씁니다.
    ///
    /// # Arguments
    ///
    /// * `identity` - 사용자 식별자 (이메일)
    /// * `refresh_token` - 발급된 리프레시 토큰
    /// * `ttl` - 리프레시 토큰 수명
    pub async fn store_refresh_token(
        &self,
        identity: &str,
        refresh_token: &str,
        ttl: Duration,
    ) -> AppResult<()> {
        let key = Self::refresh_token_key(identity);
        self.store.set(&key, refresh_token, ttl).await?;

        log::debug!("리프레시 토큰 저장 완료 - key: {}, ttl: {:?}", key, ttl);
        Ok(())
    }

    pub async fn find_refresh_token(&self, identity: &str) -> AppResult<Option<String>> {
        self.store.get(&Self::refresh_token_key(identity)).await
    }

    /// 리프레시 토큰을 삭제합니다. 없으면 아무 일도 하지 않습니다.
    pub async fn delete_refresh_token(&self, identity: &str) -> AppResult<()> {
        self.store.delete(&Self::refresh_token_key(identity)).await
    }

    /// 액세스 토큰을 남은 수명 동안 블랙리스트에 올립니다.
    ///
    /// `remaining`이 0이면 저장하지 않습니다.
    pub async fn blacklist_token(&self, access_token: &str, remaining: Duration) -> AppResult<()> {
        if remaining.is_zero() {
            return Ok(());
        }

        let key = Self::blacklist_key(access_token);
        self.store.set(&key, access_token, remaining).await?;

        log::info!("토큰이 블랙리스트에 추가됨 - 토큰 해시: {}, TTL: {}ms", &key[3..19], remaining.as_millis());
        Ok(())
    }

    pub async fn is_blacklisted(&self, access_token: &str) -> AppResult<bool> {
        Ok(self.store.get(&Self::blacklist_key(access_token)).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::InMemorySessionStore;

    #[test]
    fn test_refresh_token_key_uses_base64_identity() {
        assert_eq!(TokenRepository::refresh_token_key("a@x.com"), "RT:YUB4LmNvbQ==");
        assert_eq!(
            TokenRepository::refresh_token_key("user@example.com"),
            "RT:dXNlckBleGFtcGxlLmNvbQ=="
        );
    }

    #[test]
    fn test_blacklist_key_is_sha256_hex() {
        let key = TokenRepository::blacklist_key("token");
        assert!(key.starts_with("BL:"));
        assert_eq!(key.len(), 3 + 64);
        assert_ne!(key, TokenRepository::blacklist_key("other-token"));
    }

    #[actix_web::test]
    async fn test_refresh_token_overwrite() {
        let repo = TokenRepository::new(Arc::new(InMemorySessionStore::new()));

        repo.store_refresh_token("a@x.com", "first", Duration::from_secs(60)).await.unwrap();
        repo.store_refresh_token("a@x.com", "second", Duration::from_secs(60)).await.unwrap();

        assert_eq!(repo.find_refresh_token("a@x.com").await.unwrap().as_deref(), Some("second"));

        repo.delete_refresh_token("a@x.com").await.unwrap();
        assert_eq!(repo.find_refresh_token("a@x.com").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_blacklist_zero_ttl_is_noop() {
        let store = Arc::new(InMemorySessionStore::new());
        let repo = TokenRepository::new(store.clone());

        repo.blacklist_token("tok", Duration::ZERO).await.unwrap();
        assert!(!repo.is_blacklisted("tok").await.unwrap());
        assert!(store.is_empty());

        repo.blacklist_token("tok", Duration::from_secs(30)).await.unwrap();
        assert!(repo.is_blacklisted("tok").await.unwrap());
    }
}
