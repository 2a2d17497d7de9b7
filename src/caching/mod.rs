//! # 세션 저장소 모듈
//!
//! 리프레시 토큰, 로그아웃 블랙리스트, 이메일 인증 코드를 보관하는
//! TTL 기반 키-값 저장소 추상화입니다.
//!
//! - [`redis`] - 운영용 Redis 구현 (`PSETEX`로 밀리초 단위 TTL)
//! - [`memory`] - 프로세스 내부 구현 (로컬 개발/테스트)
//!
//! 모든 연산은 키 단위로 원자적이며, 만료된 키는 존재하지 않는 것으로 취급합니다.

use std::time::Duration;
use async_trait::async_trait;
use crate::errors::AppResult;

pub mod redis;
pub mod memory;

pub use self::memory::InMemorySessionStore;
pub use self::redis::RedisClient;

/// TTL을 지원하는 세션 저장소
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// 키의 값을 조회합니다. 없거나 만료되었으면 `None`.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// 값을 저장합니다. 기존 값과 TTL은 덮어씁니다.
    ///
    /// `ttl`은 0보다 커야 합니다. 호출자가 보장합니다.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// 키를 삭제합니다. 키가 없어도 에러가 아닙니다.
    async fn delete(&self, key: &str) -> AppResult<()>;
}
