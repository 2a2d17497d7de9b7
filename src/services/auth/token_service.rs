//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 발급, 해석, 검증을 담당합니다.
//!
//! 해석은 두 가지 모드를 가집니다.
//!
//! - **식별용** (`decode_for_identity`, `token_expiration`): 서명은 검사하되 만료는 무시합니다.
//!   만료된 액세스 토큰으로 로그아웃하거나 리프레시 토큰에서 식별자를 꺼낼 때 사용합니다.
//! - **인가용** (`verify_access_token`): 서명, 만료(leeway 0), 토큰 용도를 모두 검사합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::config::JwtConfig;
use crate::domain::models::auth::Principal;
use crate::domain::models::token::{IssuedToken, TokenClaims, TokenKind};
use crate::errors::{AppError, AppResult};

/// 토큰 서명 및 수명 설정
#[derive(Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl JwtSettings {
    pub fn new(secret: impl Into<String>, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            access_ttl,
            refresh_ttl,
        }
    }

    /// 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::new(
            JwtConfig::secret(),
            Duration::minutes(JwtConfig::access_expiration_minutes()),
            Duration::days(JwtConfig::refresh_expiration_days()),
        )
    }
}

pub struct TokenService {
    settings: JwtSettings,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(settings: JwtSettings) -> Self {
        let encoding_key = EncodingKey::from_secret(settings.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(settings.secret.as_bytes());

        Self {
            settings,
            encoding_key,
            decoding_key,
        }
    }

    /// 액세스 토큰을 발급합니다.
    ///
    /// # Arguments
    ///
    /// * `principal` - 토큰에 담을 인증 주체
    ///
    /// # Returns
    ///
    /// * `IssuedToken` - 토큰 문자열과 만료 시각 (epoch 밀리초)
    ///
    /// # Errors
    ///
    /// * 서명 실패 시 `AppError::InternalError`
    pub fn issue_access_token(&self, principal: &Principal) -> AppResult<IssuedToken> {
        self.issue(principal, TokenKind::Access, self.settings.access_ttl)
    }

    /// 리프레시 토큰을 발급합니다.
    pub fn issue_refresh_token(&self, principal: &Principal) -> AppResult<IssuedToken> {
        self.issue(principal, TokenKind::Refresh, self.settings.refresh_ttl)
    }

    fn issue(&self, principal: &Principal, kind: TokenKind, ttl: Duration) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let expiration = now + ttl;

        let claims = TokenClaims {
            sub: principal.email.clone(),
            uid: principal.user_seq,
            nickname: principal.nickname.clone(),
            profile_img: principal.profile_img.clone(),
            role: principal.role,
            authorized: principal.is_authorized,
            kind,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.exp * 1000,
        })
    }

    /// 만료 여부와 무관하게 서명이 유효한 토큰의 클레임을 꺼냅니다.
    fn decode_lenient(&self, token: &str) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::AuthenticationError(format!("토큰 해석 실패: {}", e)))
    }

    /// 토큰에서 인증 주체를 복원합니다. 만료는 검사하지 않습니다.
    pub fn decode_for_identity(&self, token: &str) -> AppResult<Principal> {
        Ok(self.decode_lenient(token)?.principal())
    }

    /// 토큰 만료 시각 (epoch 밀리초). 만료는 검사하지 않습니다.
    pub fn token_expiration(&self, token: &str) -> AppResult<i64> {
        Ok(self.decode_lenient(token)?.exp * 1000)
    }

    /// 인가용 엄격 검증
    ///
    /// # Errors
    ///
    /// * 만료, 서명 불일치, 형식 오류, 리프레시 토큰 사용 시 `AppError::AuthenticationError`
    pub fn verify_access_token(&self, token: &str) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })?;

        if claims.kind != TokenKind::Access {
            return Err(AppError::AuthenticationError("액세스 토큰이 아닙니다".to_string()));
        }

        Ok(claims)
    }

    /// 리프레시 토큰 저장 TTL
    pub fn refresh_ttl(&self) -> AppResult<std::time::Duration> {
        self.settings
            .refresh_ttl
            .to_std()
            .map_err(|_| AppError::InternalError("리프레시 토큰 수명이 음수입니다".to_string()))
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
