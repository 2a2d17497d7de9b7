//! 사용자 서비스
//!
//! 인증된 사용자 본인의 데이터 조회를 담당합니다.

use std::sync::Arc;
use crate::{
    domain::{
        dto::artists::FavoriteArtistResponse,
        models::auth::RequestContext,
    },
    errors::{AppError, AppResult},
    repositories::artists::MyArtistRepository,
};

pub struct UserService {
    my_artist_repo: Arc<MyArtistRepository>,
}

impl UserService {
    pub fn new(my_artist_repo: Arc<MyArtistRepository>) -> Self {
        Self { my_artist_repo }
    }

    /// 현재 사용자의 즐겨찾기 아티스트 목록
    ///
    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 컨텍스트에 인증 주체가 없음
    /// * `AppError::DatabaseError` - 조회 실패
    pub async fn favorite_artists(&self, ctx: &RequestContext) -> AppResult<Vec<FavoriteArtistResponse>> {
        let principal = ctx.current_principal().ok_or(AppError::UserNotFound)?;

        let artists = self.my_artist_repo.find_all_by_user_id(principal.user_seq).await?;
        log::debug!("즐겨찾기 아티스트 조회 - user_seq: {}, {}건", principal.user_seq, artists.len());

        Ok(artists.iter().map(FavoriteArtistResponse::from).collect())
    }
}
