//! Client for the external image-generation API.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::AppError;

const GENERIC_FAILURE: &str = "Failed to generate image.";

/// Thin wrapper around the image-generation HTTP API.
///
/// Constructed once at startup and injected through `AppState`. Each call to
/// [`ImageClient::generate`] is an independent request: no retry, no
/// idempotency key, no caching — the same prompt submitted twice triggers
/// two upstream calls and may produce different results.
#[derive(Debug, Clone)]
pub struct ImageClient {
    http: Client,
    api_url: String,
    api_key: String,
    model: String,
    size: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorDetail {
    message: Option<String>,
}

impl ImageClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            api_url: config.image_api_url.clone(),
            api_key: config.image_api_key.clone(),
            model: config.image_model.clone(),
            size: config.image_size.clone(),
        }
    }

    /// Request one generated image for the prompt, returning its URL.
    ///
    /// All failure modes — transport errors, non-success status, an empty
    /// result set — collapse into `AppError::Upstream` carrying a
    /// displayable message, enriched with the upstream reason when the API
    /// supplies one.
    pub async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            n: 1,
            size: &self.size,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Image API request failed");
                AppError::Upstream(GENERIC_FAILURE.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let reason = response
                .json::<UpstreamErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|detail| detail.message);
            tracing::warn!(%status, reason = ?reason, "Image API returned an error");
            return Err(AppError::Upstream(upstream_message(reason.as_deref())));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(upstream_message(Some(&e.to_string()))))?;

        body.data
            .into_iter()
            .find_map(|image| image.url)
            .ok_or_else(|| AppError::Upstream(upstream_message(Some("No image was generated."))))
    }
}

/// Build the user-facing failure text, appending the upstream reason if any.
fn upstream_message(reason: Option<&str>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => format!("{GENERIC_FAILURE} Reason: {reason}"),
        _ => GENERIC_FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_without_reason_is_generic() {
        assert_eq!(upstream_message(None), "Failed to generate image.");
        assert_eq!(upstream_message(Some("")), "Failed to generate image.");
    }

    #[test]
    fn message_appends_upstream_reason() {
        assert_eq!(
            upstream_message(Some("Billing hard limit reached")),
            "Failed to generate image. Reason: Billing hard limit reached"
        );
    }

    #[test]
    fn error_body_parses_nested_message() {
        let body: UpstreamErrorBody =
            serde_json::from_str(r#"{"error":{"message":"invalid prompt"}}"#).unwrap();
        assert_eq!(
            body.error.and_then(|d| d.message).as_deref(),
            Some("invalid prompt")
        );
    }

    #[test]
    fn error_body_tolerates_missing_detail() {
        let body: UpstreamErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.error.is_none());
    }

    #[test]
    fn response_extracts_first_url() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{"data":[{"url":"https://img.example/a.png"},{"url":"https://img.example/b.png"}]}"#,
        )
        .unwrap();
        let url = body.data.into_iter().find_map(|i| i.url);
        assert_eq!(url.as_deref(), Some("https://img.example/a.png"));
    }

    #[test]
    fn empty_data_yields_no_url() {
        let body: GenerateResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(body.data.into_iter().find_map(|i| i.url).is_none());
    }
}
