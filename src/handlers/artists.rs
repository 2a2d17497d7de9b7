//! 즐겨찾기 아티스트 HTTP 핸들러
use actix_web::{get, web, HttpResponse};
use crate::domain::models::auth::RequestContext;
use crate::errors::AppError;
use crate::services::users::UserService;

#[get("/artists")]
pub async fn my_artists(
    users: web::Data<UserService>,
    ctx: RequestContext,
) -> Result<HttpResponse, AppError> {
    let artists = users.favorite_artists(&ctx).await?;

    Ok(HttpResponse::Ok().json(artists))
}
