//! Free-text search query sanitization.

use serde::Deserialize;

/// Inbound search request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub search_term: String,
}

/// Reduce a raw search term to ASCII alphanumerics and spaces.
///
/// The sanitized form is the only value ever used to build a match pattern;
/// the raw term never reaches the store. Idempotent by construction.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}
