//! Shared Module
//!
//! This module contains the wire types of the postboard API: the uniform
//! response envelope, the serialized views of accounts, posts and comments,
//! and the request bodies accepted by the blog endpoints.
//!
//! # Overview
//!
//! Nothing in here depends on the HTTP framework or the database driver, so
//! the types can be reused by clients that talk to the API.

/// Response envelope
pub mod envelope;

/// Post and comment types
pub mod blog;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use envelope::{ApiResponse, ErrorResponse};
pub use blog::{
    AccountView, CommentView, CreateCommentRequest, CreatePostRequest, PostView,
    UpdatePostRequest,
};
pub use error::SharedError;
