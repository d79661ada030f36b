//! Post store adapter: paginated listing, detail lookup, and search.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::pagination::{PageRequest, PageResult};
use crate::models::post::{Post, PostRow};
use crate::models::search::sanitize;

/// List one page of posts, newest first.
///
/// The window fetch and the total count are two separate queries issued
/// concurrently. They are not transactionally consistent with each other;
/// the count may reflect writes that landed between the two. Acceptable for
/// a blog listing.
pub async fn list_page(
    pool: &PgPool,
    request: &PageRequest,
    page_size: i64,
) -> Result<PageResult<Post>, AppError> {
    let (offset, limit) = request.window(page_size);

    let rows = sqlx::query_as::<_, PostRow>(
        "SELECT id, title, body, created_at FROM posts \
         ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool);

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts").fetch_one(pool);

    let (rows, total) = tokio::try_join!(rows, count)?;

    let items = rows
        .into_iter()
        .map(Post::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PageResult::new(items, request, page_size, total))
}

/// Find a post by its identifier.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Post, AppError> {
    let row = sqlx::query_as::<_, PostRow>(
        "SELECT id, title, body, created_at FROM posts WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Post '{id}' not found")))?;

    Post::try_from(row)
}

/// Search posts whose title or body contains the term, ignoring case.
///
/// The raw term is sanitized to alphanumerics and spaces before it is used
/// in a pattern. An empty sanitized term matches every post ('%%' in ILIKE).
/// No ordering is promised on the result set.
pub async fn search(pool: &PgPool, raw_term: &str) -> Result<Vec<Post>, AppError> {
    let term = sanitize(raw_term);
    let pattern = format!("%{term}%");

    let rows = sqlx::query_as::<_, PostRow>(
        "SELECT id, title, body, created_at FROM posts \
         WHERE title ILIKE $1 OR body ILIKE $1",
    )
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Post::try_from).collect()
}
