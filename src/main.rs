//! 바나나 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 조립합니다.
//! MongoDB, 세션 저장소(Redis 또는 메모리) 연결을 설정하고
//! JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use banana_auth_backend::caching::{InMemorySessionStore, RedisClient, SessionStore};
use banana_auth_backend::config::{
    Environment, MailConfig, RateLimitConfig, RedisConfig, ServerConfig, SessionStoreBackend,
    SessionStoreConfig, VerificationConfig,
};
use banana_auth_backend::db::Database;
use banana_auth_backend::repositories::artists::MyArtistRepository;
use banana_auth_backend::repositories::users::UserRepository;
use banana_auth_backend::routes::configure_all_routes;
use banana_auth_backend::services::auth::{AuthService, JwtSettings, TokenService};
use banana_auth_backend::services::mail::{LogCodeSender, MailRelaySender, VerificationCodeSender};
use banana_auth_backend::services::users::{UserCredentialVerifier, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 바나나 인증 서비스 시작중...");

    let (auth_service, user_service) = match build_services().await {
        Ok(services) => services,
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(auth_service, user_service).await
}

async fn build_services()
-> Result<(web::Data<AuthService>, web::Data<UserService>), Box<dyn std::error::Error>> {
    info!("📡 데이터베이스 연결 중...");
    let database = Arc::new(Database::new().await?);

    let user_repo = Arc::new(UserRepository::new(database.clone()));
    if let Err(e) = user_repo.create_indexes().await {
        error!("user 인덱스 생성 실패: {}", e);
    }

    let store = initialize_session_store().await?;

    let environment = Environment::current();
    info!("🔧 실행 환경: {:?}", environment);

    let jwt_settings = JwtSettings::from_env();
    if environment.is_production() && std::env::var("JWT_SECRET").is_err() {
        return Err("JWT_SECRET must be set in production".into());
    }

    let code_sender = initialize_code_sender(&environment)?;

    let auth_service = AuthService::new(
        Arc::new(UserCredentialVerifier::new(user_repo)),
        Arc::new(TokenService::new(jwt_settings)),
        store,
        code_sender,
        Duration::from_secs(VerificationConfig::code_expiration_minutes() * 60),
    );
    let user_service = UserService::new(Arc::new(MyArtistRepository::new(database)));

    Ok((web::Data::new(auth_service), web::Data::new(user_service)))
}

async fn initialize_session_store() -> Result<Arc<dyn SessionStore>, Box<dyn std::error::Error>> {
    match SessionStoreConfig::backend() {
        SessionStoreBackend::Redis => {
            info!("📡 Redis 연결 중...");
            Ok(Arc::new(RedisClient::new(&RedisConfig::url()).await?))
        }
        SessionStoreBackend::Memory => {
            info!("🧪 메모리 세션 저장소 사용 (단일 프로세스 전용)");
            Ok(Arc::new(InMemorySessionStore::new()))
        }
    }
}

fn initialize_code_sender(
    environment: &Environment,
) -> Result<Arc<dyn VerificationCodeSender>, Box<dyn std::error::Error>> {
    match MailConfig::relay_url() {
        Some(url) => {
            info!("📧 메일 릴레이: {}", url);
            Ok(Arc::new(MailRelaySender::new(url)))
        }
        None if environment.is_production() => {
            Err("MAIL_RELAY_URL must be set in production".into())
        }
        None => {
            warn!("MAIL_RELAY_URL not set, verification codes are only logged");
            Ok(Arc::new(LogCodeSender))
        }
    }
}

async fn start_http_server(
    auth_service: web::Data<AuthService>,
    user_service: web::Data<UserService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(auth_service.clone())
            .app_data(user_service.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

fn load_env_file() {
    let profile = Environment::profile();

    // 로거 초기화 전이므로 결과는 표준 에러로 출력
    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
