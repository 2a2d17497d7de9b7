//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 단위 구조체의 정적 함수로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, Redis, 세션 저장소, 서버, 환경 설정
//! - [`auth_config`] - JWT, 이메일 인증 코드, 메일 릴레이 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! let env = Environment::current();
//! let address = ServerConfig::bind_address();
//! let minutes = JwtConfig::access_expiration_minutes();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export PROFILE="dev"             # dev, prod (.env 파일 선택, ENVIRONMENT 기본값)
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SESSION_STORE="redis"     # redis, memory
//! export REDIS_URL="redis://localhost:6379"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="banana"
//! export JWT_SECRET="your-super-secret-key"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
