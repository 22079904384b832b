//! Comments Module
//!
//! Storage and HTTP handlers for comments on posts.

pub mod db;
pub mod handlers;

pub use handlers::{create_comment, list_post_comments};
