//! 테스트 공용 픽스처
//!
//! 실제 `TokenService`, 메모리 세션 저장소, 스텁 자격 증명 검증기와 코드 발송기로
//! 외부 인프라 없이 인증 흐름을 구성합니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use crate::caching::InMemorySessionStore;
use crate::domain::entities::users::Role;
use crate::domain::models::auth::Principal;
use crate::errors::{AppError, AppResult};
use crate::services::auth::{AuthService, JwtSettings, TokenService};
use crate::services::mail::VerificationCodeSender;
use crate::services::users::{AuthFailure, CredentialVerifier};

pub(crate) const TEST_EMAIL: &str = "a@x.com";
pub(crate) const TEST_PASSWORD: &str = "banana1234!";

pub(crate) fn sample_principal() -> Principal {
    Principal {
        user_seq: 1,
        email: TEST_EMAIL.to_string(),
        nickname: "banana".to_string(),
        profile_img: "default_profile_1.png".to_string(),
        role: Role::User,
        is_authorized: true,
    }
}

pub(crate) fn test_settings() -> JwtSettings {
    JwtSettings::new(
        "test-secret",
        chrono::Duration::minutes(30),
        chrono::Duration::days(14),
    )
}

pub(crate) fn token_service() -> TokenService {
    TokenService::new(test_settings())
}

/// 메모리 기반 자격 증명 검증기
#[derive(Default)]
pub(crate) struct StubVerifier {
    accounts: Mutex<HashMap<String, (String, Principal)>>,
    unavailable: bool,
}

impl StubVerifier {
    pub(crate) fn with_sample_account() -> Self {
        let verifier = Self::default();
        verifier.add_account(sample_principal(), TEST_PASSWORD);
        verifier
    }

    pub(crate) fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub(crate) fn add_account(&self, principal: Principal, password: &str) {
        self.accounts
            .lock()
            .unwrap()
            .insert(principal.email.clone(), (password.to_string(), principal));
    }
}

#[async_trait]
impl CredentialVerifier for StubVerifier {
    async fn verify_credentials(&self, identity: &str, secret: &str) -> Result<Principal, AuthFailure> {
        if self.unavailable {
            return Err(AuthFailure::Unavailable("stub backend down".to_string()));
        }

        let accounts = self.accounts.lock().unwrap();
        match accounts.get(identity) {
            None => Err(AuthFailure::UnknownAccount),
            Some((password, _)) if password != secret => Err(AuthFailure::BadCredentials),
            Some((_, principal)) => Ok(principal.clone()),
        }
    }
}

/// 보낸 코드를 기록하는 발송기
#[derive(Default)]
pub(crate) struct RecordingSender {
    sent: Mutex<Vec<(String, String)>>,
    failing: bool,
}

impl RecordingSender {
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub(crate) fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }

    pub(crate) fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl VerificationCodeSender for RecordingSender {
    async fn send_code(&self, email: &str, code: &str) -> AppResult<()> {
        if self.failing {
            return Err(AppError::InternalError("stub relay down".to_string()));
        }
        self.sent.lock().unwrap().push((email.to_string(), code.to_string()));
        Ok(())
    }
}

fn build_service(
    verifier: StubVerifier,
    settings: JwtSettings,
    store: Arc<InMemorySessionStore>,
    sender: Arc<RecordingSender>,
) -> AuthService {
    AuthService::new(
        Arc::new(verifier),
        Arc::new(TokenService::new(settings)),
        store,
        sender,
        Duration::from_secs(300),
    )
}

pub(crate) fn auth_service_with(
    verifier: StubVerifier,
    settings: JwtSettings,
    store: Arc<InMemorySessionStore>,
) -> AuthService {
    build_service(verifier, settings, store, Arc::new(RecordingSender::default()))
}

/// 샘플 계정 서비스와 그 저장소, 주어진 발송기
pub(crate) fn auth_service_with_sender(
    sender: Arc<RecordingSender>,
) -> (AuthService, Arc<InMemorySessionStore>) {
    let store = Arc::new(InMemorySessionStore::new());
    let service = build_service(StubVerifier::with_sample_account(), test_settings(), store.clone(), sender);
    (service, store)
}

/// 샘플 계정 하나가 등록된 서비스와 그 저장소
pub(crate) fn auth_service() -> (AuthService, Arc<InMemorySessionStore>) {
    auth_service_with_sender(Arc::new(RecordingSender::default()))
}
