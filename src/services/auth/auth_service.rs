//! 세션/토큰 수명주기 서비스
//!
//! 로그인, 로그아웃, 액세스 토큰 재발급, 이메일 인증, 비밀번호 재확인을 담당합니다.
//! 협력 객체는 모두 생성자로 주입받습니다.
//!
//! - [`CredentialVerifier`] - 자격 증명 확인
//! - [`TokenService`] - JWT 발급/해석
//! - [`SessionStore`] - 리프레시 토큰, 블랙리스트, 인증 코드 보관
//! - [`VerificationCodeSender`] - 인증 코드 메일 전달
//!
//! 인증 주체를 읽거나 바꾸는 연산은 [`RequestContext`]를 명시적으로 받습니다.
//!
//! ## 흐름
//!
//! ```text
//! login:    credentials → verifier → principal → access + refresh → RT:<id> 저장 → ctx 설정
//! logout:   ctx 식별자 → RT:<id> 삭제 → BL:<hash> (남은 수명) → ctx 해제
//! reissue:  refresh → 식별자 해석 → RT:<id> 비교 → 새 access → ctx 설정
//! ```

use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use rand::Rng;
use crate::caching::SessionStore;
use crate::domain::dto::auth::{LoginResponse, ReissueResponse};
use crate::domain::models::auth::{Credentials, Principal, RequestContext};
use crate::errors::{AppError, AppResult};
use crate::repositories::tokens::TokenRepository;
use crate::repositories::verification::VerificationRepository;
use crate::services::auth::TokenService;
use crate::services::mail::VerificationCodeSender;
use crate::services::users::CredentialVerifier;

pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
    tokens: Arc<TokenService>,
    token_repo: TokenRepository,
    verification_repo: VerificationRepository,
    code_sender: Arc<dyn VerificationCodeSender>,
    verification_ttl: Duration,
}

impl AuthService {
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        tokens: Arc<TokenService>,
        store: Arc<dyn SessionStore>,
        code_sender: Arc<dyn VerificationCodeSender>,
        verification_ttl: Duration,
    ) -> Self {
        Self {
            verifier,
            tokens,
            token_repo: TokenRepository::new(store.clone()),
            verification_repo: VerificationRepository::new(store),
            code_sender,
            verification_ttl,
        }
    }

    pub fn token_service(&self) -> &TokenService {
        &self.tokens
    }

    /// 로그인
    ///
    /// 자격 증명을 검증하고 액세스/리프레시 토큰을 발급합니다.
    /// 리프레시 토큰은 식별자 키에 저장되며 기존 값을 덮어씁니다.
    ///
    /// # Arguments
    ///
    /// * `credentials` - 이메일과 평문 비밀번호. 검증 직후 폐기됩니다.
    /// * `ctx` - 성공 시 인증 주체가 설정됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::LoginFailed` - 검증 실패 (사유와 무관)
    /// * `AppError::RedisError` - 세션 저장소 실패
    pub async fn login(
        &self,
        credentials: Credentials,
        ctx: &mut RequestContext,
    ) -> AppResult<LoginResponse> {
        let Credentials { email, password } = credentials;

        let principal = match self.verifier.verify_credentials(&email, &password).await {
            Ok(principal) => principal,
            Err(reason) => {
                log::warn!("로그인 실패 - 사용자: {}, 사유: {}", email, reason);
                return Err(AppError::LoginFailed);
            }
        };
        drop(password);

        let access = self.tokens.issue_access_token(&principal)?;
        let refresh = self.tokens.issue_refresh_token(&principal)?;

        self.token_repo
            .store_refresh_token(principal.identity(), &refresh.token, self.tokens.refresh_ttl()?)
            .await?;

        log::info!("로그인 성공 - 사용자: {}, user_seq: {}", principal.email, principal.user_seq);

        let response = LoginResponse {
            user_seq: principal.user_seq,
            nickname: principal.nickname.clone(),
            profile_img: principal.profile_img.clone(),
            role: principal.role,
            token: access.token,
            expiration: access.expires_at,
            refresh_token: refresh.token,
        };

        ctx.set_current(principal);
        Ok(response)
    }

    /// 로그아웃
    ///
    /// 리프레시 토큰을 삭제하고, 액세스 토큰을 남은 수명 동안 블랙리스트에 올립니다.
    /// 이미 만료된 토큰은 블랙리스트에 올리지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 컨텍스트에 인증 주체가 없음
    pub async fn logout(&self, access_token: &str, ctx: &mut RequestContext) -> AppResult<()> {
        let identity = ctx
            .current_identity()
            .ok_or(AppError::UserNotFound)?
            .to_string();

        self.token_repo.delete_refresh_token(&identity).await?;

        let remaining_ms = self.tokens.token_expiration(access_token)? - Utc::now().timestamp_millis();
        if remaining_ms > 0 {
            self.token_repo
                .blacklist_token(access_token, Duration::from_millis(remaining_ms as u64))
                .await?;
        } else {
            log::debug!("이미 만료된 토큰 - 블랙리스트 생략: {}", identity);
        }

        ctx.clear_current();
        log::info!("로그아웃 완료 - 사용자: {}", identity);
        Ok(())
    }

    /// 액세스 토큰 재발급
    ///
    /// 제시된 리프레시 토큰은 서버에 저장된 값과 정확히 일치해야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::RefreshTokenInvalid` - 해석 불가, 저장값 없음, 저장값 불일치
    pub async fn reissue(
        &self,
        refresh_token: &str,
        ctx: &mut RequestContext,
    ) -> AppResult<ReissueResponse> {
        let principal = self.tokens.decode_for_identity(refresh_token).map_err(|e| {
            log::warn!("리프레시 토큰 해석 실패: {}", e);
            AppError::RefreshTokenInvalid
        })?;

        let stored = self
            .token_repo
            .find_refresh_token(principal.identity())
            .await?
            .ok_or_else(|| {
                log::warn!("저장된 리프레시 토큰 없음 - 사용자: {}", principal.email);
                AppError::RefreshTokenInvalid
            })?;

        if stored != refresh_token {
            log::warn!("리프레시 토큰 불일치 - 사용자: {}", principal.email);
            return Err(AppError::RefreshTokenInvalid);
        }

        let access = self.tokens.issue_access_token(&principal)?;
        log::info!("액세스 토큰 재발급 - 사용자: {}", principal.email);

        ctx.set_current(principal);
        Ok(ReissueResponse {
            token: access.token,
            expiration: access.expires_at,
        })
    }

    /// 이메일 인증 코드 확인
    ///
    /// 일치하면 코드를 삭제합니다. 불일치 시 코드는 그대로 남습니다.
    /// 조회와 삭제가 분리되어 있어, 동시에 들어온 올바른 제출은 둘 다 성공할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::VerificationExpired` - 코드가 없거나 만료됨
    /// * `AppError::VerificationCodeMismatch` - 코드 불일치
    pub async fn verify_email(&self, email: &str, code: &str) -> AppResult<()> {
        let stored = self
            .verification_repo
            .find_code(email)
            .await?
            .ok_or(AppError::VerificationExpired)?;

        if stored != code.trim() {
            log::warn!("인증 코드 불일치 - 이메일: {}", email);
            return Err(AppError::VerificationCodeMismatch);
        }

        self.verification_repo.delete_code(email).await?;
        log::info!("이메일 인증 완료: {}", email);
        Ok(())
    }

    /// 6자리 인증 코드를 발급하여 저장하고 메일로 전달합니다. 이전 코드는 덮어씁니다.
    ///
    /// 코드는 호출자에게 돌려주지 않습니다. 전달에 실패하면 저장한 코드를 지웁니다.
    pub async fn issue_verification_code(&self, email: &str) -> AppResult<()> {
        let code = format!("{:06}", rand::thread_rng().gen_range(0..1_000_000));

        self.verification_repo
            .store_code(email, &code, self.verification_ttl)
            .await?;

        if let Err(e) = self.code_sender.send_code(email, &code).await {
            log::error!("인증 코드 전달 실패 - 이메일: {}, 사유: {}", email, e);
            self.verification_repo.delete_code(email).await?;
            return Err(e);
        }

        log::info!("인증 코드 발급 - 이메일: {}, TTL: {:?}", email, self.verification_ttl);
        Ok(())
    }

    /// 비밀번호 재확인
    ///
    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 컨텍스트에 인증 주체가 없음
    /// * `AppError::PasswordMismatch` - 검증 실패 (사유와 무관)
    pub async fn check_password(&self, password: &str, ctx: &RequestContext) -> AppResult<()> {
        let identity = ctx.current_identity().ok_or(AppError::UserNotFound)?;

        self.verifier
            .verify_credentials(identity, password)
            .await
            .map(|_| ())
            .map_err(|reason| {
                log::warn!("비밀번호 재확인 실패 - 사용자: {}, 사유: {}", identity, reason);
                AppError::PasswordMismatch
            })
    }

    /// 액세스 토큰 인가 검사
    ///
    /// 서명, 만료, 토큰 용도를 검증한 뒤 로그아웃 블랙리스트를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 검증 실패 또는 로그아웃된 토큰
    pub async fn authorize(&self, access_token: &str) -> AppResult<Principal> {
        let claims = self.tokens.verify_access_token(access_token)?;

        if self.token_repo.is_blacklisted(access_token).await? {
            log::warn!("블랙리스트 토큰 사용 시도 - 사용자: {}", claims.sub);
            return Err(AppError::AuthenticationError("로그아웃된 토큰입니다".to_string()));
        }

        Ok(claims.principal())
    }
}
