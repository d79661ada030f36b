//! Blog post model with eager boundary validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

/// A single blog post as exposed by the API. The store owns these records;
/// this service never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Raw row shape as it comes back from the store, before validation.
///
/// Text columns are decoded as nullable so that a record missing a required
/// field is rejected explicitly instead of panicking inside row decoding.
#[derive(Debug, Clone, FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub body: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl TryFrom<PostRow> for Post {
    type Error = AppError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let missing = |field: &str| {
            AppError::MalformedRecord(format!("post {id} is missing required field '{field}'"))
        };
        Ok(Self {
            id,
            title: row.title.ok_or_else(|| missing("title"))?,
            body: row.body.ok_or_else(|| missing("body"))?,
            created_at: row.created_at.ok_or_else(|| missing("created_at"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row() -> PostRow {
        PostRow {
            id: Uuid::new_v4(),
            title: Some("Asynchronous Programming".to_string()),
            body: Some("Explore non-blocking I/O.".to_string()),
            created_at: Some(Utc::now()),
        }
    }

    #[test]
    fn valid_row_converts() {
        let row = full_row();
        let post = Post::try_from(row.clone()).unwrap();
        assert_eq!(post.id, row.id);
        assert_eq!(post.title, "Asynchronous Programming");
    }

    #[test]
    fn missing_title_is_malformed() {
        let mut row = full_row();
        row.title = None;
        let err = Post::try_from(row).unwrap_err();
        assert!(matches!(err, AppError::MalformedRecord(_)));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn missing_body_is_malformed() {
        let mut row = full_row();
        row.body = None;
        assert!(matches!(
            Post::try_from(row),
            Err(AppError::MalformedRecord(_))
        ));
    }

    #[test]
    fn post_serializes_all_fields() {
        let post = Post::try_from(full_row()).unwrap();
        let json = serde_json::to_value(&post).unwrap();
        assert!(json["id"].is_string());
        assert!(json["title"].is_string());
        assert!(json["body"].is_string());
        assert!(json["created_at"].is_string());
    }
}
