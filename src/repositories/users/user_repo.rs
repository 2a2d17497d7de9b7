//! # 사용자 리포지토리 구현
//!
//! `user` 컬렉션에 대한 조회 계층입니다.
//! 자격 증명 검증에 필요한 이메일 조회를 제공합니다.

use std::sync::Arc;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use crate::{
    db::Database,
    domain::entities::users::User,
    errors::{AppError, AppResult},
};

pub const USER_COLLECTION: &str = "user";

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(USER_COLLECTION)
    }

    /// 이메일로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * 데이터베이스 조회 실패 시 `AppError::DatabaseError`
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 이메일/닉네임 유니크 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let unique = || IndexOptions::builder().unique(true).build();

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique())
                .build(),
            IndexModel::builder()
                .keys(doc! { "nickname": 1 })
                .options(unique())
                .build(),
        ];

        self.collection()
            .create_indexes(indexes)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("user 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}
