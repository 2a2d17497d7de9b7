//! User Entity Implementation
//!
//! `user` 컬렉션에 저장되는 사용자 엔티티입니다.
//! 비밀번호는 bcrypt 해시로만 보관합니다.

use serde::{Deserialize, Serialize};

/// 기본 프로필 이미지
pub const DEFAULT_PROFILE_IMG: &str = "default_profile_1.png";

/// 사용자 역할
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Artist,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 사용자 순번 (user_seq)
    #[serde(rename = "_id")]
    pub id: i64,
    pub email: String,
    /// bcrypt 해시
    pub password: String,
    pub nickname: String,
    #[serde(default = "default_profile_img")]
    pub profile_img: String,
    #[serde(default)]
    pub artist_like_count: i32,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_authorized: bool,
}

fn default_profile_img() -> String {
    DEFAULT_PROFILE_IMG.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Artist).unwrap(), "\"ARTIST\"");
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_user_defaults_when_fields_missing() {
        let user: User = serde_json::from_value(serde_json::json!({
            "_id": 7,
            "email": "a@x.com",
            "password": "$2b$04$hash",
            "nickname": "banana"
        }))
        .unwrap();

        assert_eq!(user.profile_img, DEFAULT_PROFILE_IMG);
        assert_eq!(user.role, Role::User);
        assert!(!user.is_authorized);
    }
}
