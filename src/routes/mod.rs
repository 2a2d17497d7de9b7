//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Routes
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | POST | `/api/v1/auth/login` | - |
//! | POST | `/api/v1/auth/reissue` | - |
//! | POST | `/api/v1/auth/email/code` | - |
//! | POST | `/api/v1/auth/email/verify` | - |
//! | POST | `/api/v1/auth/logout` | Bearer |
//! | POST | `/api/v1/auth/password/check` | Bearer |
//! | GET | `/api/v1/me/artists` | Bearer |
//! | GET | `/health` | - |
//!
//! 핸들러는 `web::Data<AuthService>`, `web::Data<UserService>`가 앱에 등록되어 있다고 가정합니다.

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg);
}

pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::reissue)
            .service(handlers::auth::issue_email_code)
            .service(handlers::auth::verify_email)
            // 인증이 필요한 라우트들
            .service(
                web::scope("")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::auth::logout)
                    .service(handlers::auth::check_password),
            ),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::artists::my_artists),
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "banana_auth_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use crate::test_support::auth_service;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_protected_routes_require_bearer() {
        let (service, _store) = auth_service();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_auth_routes),
        )
        .await;

        for uri in ["/api/v1/auth/logout", "/api/v1/auth/password/check"] {
            let req = test::TestRequest::post().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        }
    }
}
