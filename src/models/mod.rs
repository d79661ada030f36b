//! Database models and DTOs for the blog domain.

pub mod pagination;
pub mod post;
pub mod search;
