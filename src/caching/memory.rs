//! 프로세스 내부 세션 저장소
//!
//! `SESSION_STORE=memory`일 때와 테스트에서 사용합니다.
//! 만료된 키는 조회 시점과 쓰기 시점에 정리합니다.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use crate::caching::SessionStore;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, (String, Instant)>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::InternalError("세션 저장소 잠금 실패".to_string()))
    }

    /// 키의 남은 TTL. 없거나 만료되었으면 `None`.
    pub fn remaining_ttl(&self, key: &str) -> Option<Duration> {
        let entries = self.entries.lock().ok()?;
        let (_, expires_at) = entries.get(key)?;
        expires_at.checked_duration_since(Instant::now())
    }

    /// 만료되지 않은 키 개수
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .lock()
            .map(|entries| entries.values().filter(|(_, exp)| *exp > now).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut entries = self.lock()?;
        let expired = match entries.get(key) {
            Some((value, expires_at)) if *expires_at > Instant::now() => {
                return Ok(Some(value.clone()));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        if ttl.is_zero() {
            return Err(AppError::InternalError("TTL은 0일 수 없습니다".to_string()));
        }
        let now = Instant::now();
        let mut entries = self.lock()?;
        // 다시 조회되지 않는 키(블랙리스트 등)도 쓰기마다 정리
        entries.retain(|_, (_, expires_at)| *expires_at > now);
        entries.insert(key.to_string(), (value.to_string(), now + ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_set_get_delete() {
        let store = InMemorySessionStore::new();

        store.set("RT:a", "token", Duration::from_secs(60)).await.unwrap();
        assert_eq!(store.get("RT:a").await.unwrap().as_deref(), Some("token"));

        store.delete("RT:a").await.unwrap();
        assert_eq!(store.get("RT:a").await.unwrap(), None);

        // 없는 키 삭제는 에러가 아님
        store.delete("RT:a").await.unwrap();
    }

    #[actix_web::test]
    async fn test_set_overwrites_value_and_ttl() {
        let store = InMemorySessionStore::new();

        store.set("k", "first", Duration::from_secs(10)).await.unwrap();
        store.set("k", "second", Duration::from_secs(3600)).await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
        let ttl = store.remaining_ttl("k").unwrap();
        assert!(ttl > Duration::from_secs(3500));
    }

    #[actix_web::test]
    async fn test_expired_entry_is_absent() {
        let store = InMemorySessionStore::new();

        store.set("k", "v", Duration::from_millis(20)).await.unwrap();
        std::thread::sleep(Duration::from_millis(40));

        assert_eq!(store.get("k").await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_set_sweeps_expired_entries() {
        let store = InMemorySessionStore::new();

        for i in 0..1000 {
            store.set(&format!("BL:{}", i), "logout", Duration::from_millis(5)).await.unwrap();
        }
        std::thread::sleep(Duration::from_millis(30));

        store.set("RT:x", "token", Duration::from_secs(60)).await.unwrap();
        assert_eq!(store.get("RT:x").await.unwrap().as_deref(), Some("token"));

        // 만료 항목이 실제 맵에서도 제거되어야 함
        assert_eq!(store.entries.lock().unwrap().len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_zero_ttl_rejected() {
        let store = InMemorySessionStore::new();
        assert!(store.set("k", "v", Duration::ZERO).await.is_err());
    }
}
