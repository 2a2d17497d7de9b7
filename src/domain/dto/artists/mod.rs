//! 즐겨찾기 아티스트 응답 DTO
use serde::Serialize;
use crate::domain::entities::artists::MyArtist;

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteArtistResponse {
    pub artist_seq: i64,
    /// 등록 시각 (RFC 3339)
    pub created_at: String,
}

impl From<&MyArtist> for FavoriteArtistResponse {
    fn from(entry: &MyArtist) -> Self {
        Self {
            artist_seq: entry.id.artist_seq,
            created_at: entry
                .created_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
        }
    }
}
