//! Gallery HTTP Handlers
//!
//! - `GET /api/images` - 블러 플레이스홀더가 채워진 전체 목록
//! - `GET /api/images/{id}` - 이번 채움 기준 `id`의 이미지 하나
use actix_web::{get, web, HttpResponse};

use crate::core::AppState;
use crate::errors::errors::AppError;

#[get("")]
pub async fn list_images(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.gallery.gallery().await)
}

#[get("/{id}")]
pub async fn get_image(
    id: web::Path<usize>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let image = state.gallery.image(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(image))
}
