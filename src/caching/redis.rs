//! # Redis 세션 저장소 구현
//!
//! Redis를 백엔드로 하는 [`SessionStore`] 구현입니다.
//!
//! ## 연결 관리
//!
//! Redis 연결은 멀티플렉싱을 사용하여 단일 TCP 연결에서
//! 여러 동시 요청을 효율적으로 처리합니다.
//!
//! ## TTL 정밀도
//!
//! 블랙리스트 TTL은 토큰의 남은 수명(밀리초)과 같아야 하므로
//! `SETEX` 대신 `PSETEX`를 사용합니다.

use std::time::Duration;
use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use crate::caching::SessionStore;
use crate::errors::{AppError, AppResult};

/// Redis 클라이언트 래퍼
///
/// ```rust,ignore
/// let redis = RedisClient::new(&RedisConfig::url()).await?;
/// redis.set("RT:dXNlckBleGFtcGxlLmNvbQ==", token, Duration::from_secs(60)).await?;
/// let stored = redis.get("RT:dXNlckBleGFtcGxlLmNvbQ==").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    /// 멀티플렉싱을 지원하는 Redis 클라이언트
    client: Client,
}

impl RedisClient {
    /// 새 Redis 클라이언트 인스턴스를 생성합니다.
    ///
    /// 생성 시 `PING`으로 서버 가용성을 확인합니다.
    ///
    /// # Errors
    ///
    /// * URL 형식이 잘못되었거나 서버에 연결할 수 없으면 `AppError::RedisError`
    pub async fn new(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url)?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }
}

#[async_trait]
impl SessionStore for RedisClient {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        let millis = u64::try_from(ttl.as_millis())
            .map_err(|_| AppError::RedisError(format!("TTL이 너무 큽니다: {:?}", ttl)))?;
        if millis == 0 {
            return Err(AppError::RedisError("TTL은 0일 수 없습니다".to_string()));
        }

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.pset_ex(key, value, millis).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.del(key).await?;
        Ok(())
    }
}
