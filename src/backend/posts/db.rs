/**
 * Database Operations for Posts
 *
 * Deleting a post only stamps `deleted_at`; every read below skips such rows,
 * so a deleted post behaves exactly like one that never existed.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::shared::{AccountView, PostView};

/// Post row as stored in the `posts` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Owning account
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    /// View without relations
    pub fn view(&self) -> PostView {
        PostView {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            user: None,
            comments: None,
        }
    }
}

/// Post joined with its author
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostWithAuthor {
    #[sqlx(flatten)]
    pub post: Post,
    pub author_username: String,
    pub author_email: String,
    pub author_created_at: DateTime<Utc>,
}

impl PostWithAuthor {
    /// View with the `user` relation filled in
    pub fn view(&self) -> PostView {
        PostView {
            user: Some(AccountView {
                id: self.post.user_id,
                username: self.author_username.clone(),
                email: self.author_email.clone(),
                created_at: self.author_created_at,
            }),
            ..self.post.view()
        }
    }
}

const POST_WITH_AUTHOR: &str = r#"
    SELECT p.id, p.title, p.content, p.user_id, p.created_at, p.updated_at, p.deleted_at,
           u.username AS author_username,
           u.email AS author_email,
           u.created_at AS author_created_at
    FROM posts p
    JOIN users u ON u.id = p.user_id
    WHERE p.deleted_at IS NULL
"#;

/// Insert a new post owned by `user_id`
pub async fn create_post(
    pool: &SqlitePool,
    user_id: i64,
    title: &str,
    content: &str,
) -> Result<Post, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (title, content, user_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, title, content, user_id, created_at, updated_at, deleted_at
        "#
    )
    .bind(title)
    .bind(content)
    .bind(user_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// All live posts with their authors, oldest first
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<PostWithAuthor>, sqlx::Error> {
    let query = format!("{POST_WITH_AUTHOR} ORDER BY p.id");

    sqlx::query_as::<_, PostWithAuthor>(&query)
        .fetch_all(pool)
        .await
}

/// Get a live post by ID
pub async fn get_post(pool: &SqlitePool, id: i64) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, user_id, created_at, updated_at, deleted_at
        FROM posts
        WHERE id = ? AND deleted_at IS NULL
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Get a live post by ID together with its author
pub async fn get_post_with_author(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<PostWithAuthor>, sqlx::Error> {
    let query = format!("{POST_WITH_AUTHOR} AND p.id = ?");

    sqlx::query_as::<_, PostWithAuthor>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Overwrite title and content of a live post
///
/// Returns `None` when the post does not exist or was deleted.
pub async fn update_post(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    content: &str,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET title = ?, content = ?, updated_at = ?
        WHERE id = ? AND deleted_at IS NULL
        RETURNING id, title, content, user_id, created_at, updated_at, deleted_at
        "#
    )
    .bind(title)
    .bind(content)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Soft-delete a live post
///
/// Returns `false` when there was nothing to delete.
pub async fn soft_delete_post(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let now = Utc::now();

    let result = sqlx::query(
        "UPDATE posts SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
    )
    .bind(now)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
