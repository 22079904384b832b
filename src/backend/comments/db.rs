/**
 * Database Operations for Comments
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::shared::{AccountView, CommentView};

/// Comment row as stored in the `comments` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn view(&self) -> CommentView {
        CommentView {
            id: self.id,
            content: self.content.clone(),
            user_id: self.user_id,
            post_id: self.post_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: None,
        }
    }
}

/// Comment joined with its author
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentWithAuthor {
    #[sqlx(flatten)]
    pub comment: Comment,
    pub author_username: String,
    pub author_email: String,
    pub author_created_at: DateTime<Utc>,
}

impl CommentWithAuthor {
    pub fn view(&self) -> CommentView {
        CommentView {
            user: Some(AccountView {
                id: self.comment.user_id,
                username: self.author_username.clone(),
                email: self.author_email.clone(),
                created_at: self.author_created_at,
            }),
            ..self.comment.view()
        }
    }
}

/// Insert a comment
///
/// A `post_id` without a matching row fails with a foreign key violation.
pub async fn create_comment(
    pool: &SqlitePool,
    user_id: i64,
    post_id: i64,
    content: &str,
) -> Result<Comment, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (content, user_id, post_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, content, user_id, post_id, created_at, updated_at, deleted_at
        "#
    )
    .bind(content)
    .bind(user_id)
    .bind(post_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Comments of a post with their authors, oldest first
pub async fn list_comments_for_post(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(
        r#"
        SELECT c.id, c.content, c.user_id, c.post_id, c.created_at, c.updated_at, c.deleted_at,
               u.username AS author_username,
               u.email AS author_email,
               u.created_at AS author_created_at
        FROM comments c
        JOIN users u ON u.id = c.user_id
        WHERE c.post_id = ? AND c.deleted_at IS NULL
        ORDER BY c.id
        "#
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}
