//! Route definitions for the inkpost API.

pub mod health;
pub mod images;
pub mod pages;
pub mod posts;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Assemble the full application router. Shared by `main` and the
/// integration tests.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/posts", get(posts::list))
        .route("/posts/search", post(posts::search))
        .route("/posts/{id}", get(posts::get_by_id))
        .route("/about", get(pages::about))
        .route("/generate-image", get(images::form).post(images::generate));

    Router::new()
        .route("/health/live", get(health::live))
        .nest("/api/v1", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
