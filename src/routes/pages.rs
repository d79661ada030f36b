//! Static page payloads.

use axum::Json;
use serde::Serialize;

use crate::errors::ApiResponse;

/// Static metadata rendered on the about page.
#[derive(Debug, Serialize)]
pub struct AboutPage {
    pub title: &'static str,
    pub description: &'static str,
}

/// GET /api/v1/about
pub async fn about() -> Json<ApiResponse<AboutPage>> {
    ApiResponse::success(AboutPage {
        title: "About",
        description: "A simple blog with paginated listings, full-text search, \
                      and AI image generation.",
    })
}
