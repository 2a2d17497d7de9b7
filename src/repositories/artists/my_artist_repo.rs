//! 즐겨찾기 아티스트 리포지토리
//!
//! `my_artist` 컬렉션에서 사용자별 즐겨찾기 목록을 조회합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection};
use crate::{
    db::Database,
    domain::entities::artists::MyArtist,
    errors::AppResult,
};

pub const MY_ARTIST_COLLECTION: &str = "my_artist";

pub struct MyArtistRepository {
    db: Arc<Database>,
}

impl MyArtistRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<MyArtist> {
        self.db.collection::<MyArtist>(MY_ARTIST_COLLECTION)
    }

    /// 사용자 순번으로 즐겨찾기 아티스트 전체를 조회합니다. 등록순으로 정렬됩니다.
    pub async fn find_all_by_user_id(&self, user_seq: i64) -> AppResult<Vec<MyArtist>> {
        let cursor = self
            .collection()
            .find(doc! { "_id.user_seq": user_seq })
            .sort(doc! { "created_at": 1 })
            .await?;

        let artists: Vec<MyArtist> = cursor.try_collect().await?;
        Ok(artists)
    }
}
