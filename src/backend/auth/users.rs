/**
 * Account Model and Database Operations
 *
 * Accounts are created on registration and never updated. `deleted_at` marks
 * a soft-deleted account; lookups ignore such rows.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Account row as stored in the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Auto-incrementing account ID
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// Email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Create a new account
///
/// Fails with a database error carrying a unique violation when the username
/// or email is taken.
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, username, email, password_hash, created_at, updated_at, deleted_at
        "#
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get an active account by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at, deleted_at
        FROM users
        WHERE username = ? AND deleted_at IS NULL
        "#
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get an active account by ID
pub async fn get_user_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at, deleted_at
        FROM users
        WHERE id = ? AND deleted_at IS NULL
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Mark an account as deleted without removing its row
pub async fn soft_delete_user(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    sqlx::query("UPDATE users SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL")
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
