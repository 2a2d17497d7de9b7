//! 즐겨찾기 아티스트 엔티티
//!
//! 사용자와 아티스트의 관계를 (`user_seq`, `artist_seq`) 복합 키로 저장합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 복합 키
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyArtistId {
    pub user_seq: i64,
    pub artist_seq: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyArtist {
    #[serde(rename = "_id")]
    pub id: MyArtistId,
    pub created_at: DateTime,
}
