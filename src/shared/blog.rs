//! Blog Types
//!
//! Serialized views of accounts, posts and comments, plus the request bodies
//! accepted by the post and comment endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::{require_non_blank, SharedError};

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountView {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A post as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostView {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Owning account
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Author, when it was loaded alongside the post
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountView>,
    /// Comments, only loaded by the single-post read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentView>>,
}

/// A comment as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentView {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AccountView>,
}

/// Body of `POST /create-post`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_blank("title", &self.title)?;
        require_non_blank("content", &self.content)
    }
}

/// Body of `PUT /upposts/{id}`
///
/// Both fields are optional; an absent or blank field leaves the stored value
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl UpdatePostRequest {
    /// Merge the requested changes over the current title and content.
    pub fn resolve(&self, title: &str, content: &str) -> (String, String) {
        fn pick(requested: Option<&String>, current: &str) -> String {
            match requested {
                Some(value) if !value.trim().is_empty() => value.clone(),
                _ => current.to_string(),
            }
        }

        (
            pick(self.title.as_ref(), title),
            pick(self.content.as_ref(), content),
        )
    }
}

/// Body of `POST /comments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
    pub post_id: i64,
}

impl CreateCommentRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_blank("content", &self.content)
    }
}
