//! 요청 단위 인증 컨텍스트
//!
//! 인증 미들웨어가 Request Extensions에 넣고, 핸들러가 추출하여
//! 서비스 연산에 명시적으로 넘깁니다. 전역/스레드 로컬 상태는 사용하지 않습니다.

use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use crate::domain::models::auth::principal::Principal;

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    principal: Option<Principal>,
    access_token: Option<String>,
}

impl RequestContext {
    /// 인증되지 않은 빈 컨텍스트
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// 검증된 액세스 토큰과 주체로 컨텍스트를 만듭니다.
    pub fn authenticated(principal: Principal, access_token: impl Into<String>) -> Self {
        Self {
            principal: Some(principal),
            access_token: Some(access_token.into()),
        }
    }

    pub fn set_current(&mut self, principal: Principal) {
        self.principal = Some(principal);
    }

    /// 현재 인증된 식별자 (이메일)
    pub fn current_identity(&self) -> Option<&str> {
        self.principal.as_ref().map(|p| p.identity())
    }

    pub fn current_principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// 요청에 실려 온 액세스 토큰
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn clear_current(&mut self) {
        self.principal = None;
        self.access_token = None;
    }
}

/// ActixWeb FromRequest trait 구현
///
/// 미들웨어를 거치지 않은 요청에서는 빈 컨텍스트를 돌려줍니다.
impl FromRequest for RequestContext {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let ctx = req
            .extensions()
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_default();
        ready(Ok(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::Role;

    fn principal() -> Principal {
        Principal {
            user_seq: 1,
            email: "a@x.com".to_string(),
            nickname: "banana".to_string(),
            profile_img: "p.png".to_string(),
            role: Role::User,
            is_authorized: true,
        }
    }

    #[test]
    fn test_set_and_clear() {
        let mut ctx = RequestContext::anonymous();
        assert_eq!(ctx.current_identity(), None);

        ctx.set_current(principal());
        assert_eq!(ctx.current_identity(), Some("a@x.com"));

        ctx.clear_current();
        assert_eq!(ctx.current_identity(), None);
        assert_eq!(ctx.access_token(), None);
    }

    #[test]
    fn test_authenticated_keeps_token() {
        let ctx = RequestContext::authenticated(principal(), "abc.def.ghi");
        assert_eq!(ctx.access_token(), Some("abc.def.ghi"));
        assert_eq!(ctx.current_principal().map(|p| p.user_seq), Some(1));
    }
}
