//! Posts Module
//!
//! Storage and HTTP handlers for blog posts.
//!
//! - **`db`** - post rows, joins with the author, soft delete
//! - **`handlers`** - list, read, create, update and delete endpoints

pub mod db;
pub mod handlers;

pub use handlers::{create_post, delete_post, get_post, list_posts, update_post};
