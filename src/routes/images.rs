//! Image-generation form routes.
//!
//! Failures from the upstream API never fail the request: they come back as
//! a normal form payload with `image_url` absent and a displayable `error`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::{ApiResponse, AppError};
use crate::AppState;

/// Inbound generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
}

/// Form state returned by both the blank form and a generation attempt.
#[derive(Debug, Clone, Serialize)]
pub struct ImageForm {
    pub prompt: String,
    pub image_url: Option<String>,
    pub error: Option<String>,
}

impl ImageForm {
    fn blank() -> Self {
        Self {
            prompt: String::new(),
            image_url: None,
            error: None,
        }
    }
}

/// GET /api/v1/generate-image — the empty form.
pub async fn form() -> Json<ApiResponse<ImageForm>> {
    ApiResponse::success(ImageForm::blank())
}

/// POST /api/v1/generate-image — run one generation attempt.
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateImageRequest>,
) -> Result<Json<ApiResponse<ImageForm>>, AppError> {
    let form = match state.images.generate(&body.prompt).await {
        Ok(url) => ImageForm {
            prompt: body.prompt,
            image_url: Some(url),
            error: None,
        },
        Err(AppError::Upstream(message)) => ImageForm {
            prompt: body.prompt,
            image_url: None,
            error: Some(message),
        },
        Err(other) => return Err(other),
    };
    Ok(ApiResponse::success(form))
}
