pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

use sqlx::PgPool;

use crate::services::image::ImageClient;

/// Shared application state passed to all Axum handlers.
///
/// The image client is constructed once at startup and injected here rather
/// than referenced as a global, so tests can substitute their own.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: config::AppConfig,
    pub images: ImageClient,
}
