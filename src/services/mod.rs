//! Business logic services for the blog API.

pub mod image;
pub mod post;
