//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, Redis, 세션 저장소, 서버 및 환경 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 없으면 개발용 기본값을 사용합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT`에서 현재 환경을 결정합니다. 없으면 `PROFILE`을 따릅니다.
    pub fn current() -> Self {
        Self::resolve(env::var("ENVIRONMENT").ok().as_deref(), &Self::profile())
    }

    /// `.env` 파일 선택에 쓰는 프로필 (`prod`, `dev`). 기본값 `dev`.
    pub fn profile() -> String {
        env::var("PROFILE").unwrap_or_else(|_| "dev".to_string())
    }

    pub fn resolve(environment: Option<&str>, profile: &str) -> Self {
        match environment.map(str::trim).filter(|v| !v.is_empty()) {
            Some(name) => Self::from_str(name),
            None => Self::from_str(profile),
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn workers() -> usize {
        env::var("SERVER_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|w| *w > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 요청 속도 제한 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self { per_second, burst_size }
    }
}

/// Redis 접속 설정
pub struct RedisConfig;

impl RedisConfig {
    pub fn url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }
}

/// MongoDB 접속 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "banana".to_string())
    }
}

/// 세션 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionStoreBackend {
    /// 운영용 Redis 저장소
    Redis,
    /// 프로세스 내부 메모리 저장소 (로컬 개발/테스트용)
    Memory,
}

/// 세션 저장소 선택 설정
pub struct SessionStoreConfig;

impl SessionStoreConfig {
    /// `SESSION_STORE` 값(`redis` | `memory`)으로 백엔드를 선택합니다.
    pub fn backend() -> SessionStoreBackend {
        Self::parse_backend(&env::var("SESSION_STORE").unwrap_or_default())
    }

    pub fn parse_backend(value: &str) -> SessionStoreBackend {
        match value.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => SessionStoreBackend::Memory,
            _ => SessionStoreBackend::Redis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_falls_back_to_profile() {
        assert_eq!(Environment::resolve(None, "dev"), Environment::Development);
        assert_eq!(Environment::resolve(Some(" "), "dev"), Environment::Development);
        assert_eq!(Environment::resolve(None, "prod"), Environment::Production);
        assert_eq!(Environment::resolve(Some("staging"), "dev"), Environment::Staging);
        assert_eq!(Environment::resolve(Some("production"), "dev"), Environment::Production);
    }

    #[test]
    fn test_session_store_backend_parsing() {
        assert_eq!(SessionStoreConfig::parse_backend("memory"), SessionStoreBackend::Memory);
        assert_eq!(SessionStoreConfig::parse_backend(" Memory "), SessionStoreBackend::Memory);
        assert_eq!(SessionStoreConfig::parse_backend("redis"), SessionStoreBackend::Redis);
        assert_eq!(SessionStoreConfig::parse_backend(""), SessionStoreBackend::Redis);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}
