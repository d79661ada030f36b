//! Post routes: paginated listing, detail, and search.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::models::pagination::{PageRequest, PageResult};
use crate::models::post::Post;
use crate::models::search::SearchRequest;
use crate::services::post as post_service;
use crate::AppState;

/// GET /api/v1/posts — list posts newest-first, one page at a time.
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<ApiResponse<PageResult<Post>>>, AppError> {
    let result = post_service::list_page(&state.db, &page, state.config.page_size).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/v1/posts/{id} — get a single post.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Post>>, AppError> {
    let post = post_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(post))
}

/// POST /api/v1/posts/search — free-text search over title and body.
pub async fn search(
    State(state): State<AppState>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<ApiResponse<Vec<Post>>>, AppError> {
    let posts = post_service::search(&state.db, &body.search_term).await?;
    Ok(ApiResponse::success(posts))
}
