/**
 * Comment Handlers
 *
 * Comments can be listed by anyone and created by any authenticated account,
 * but only against a post that exists and is not deleted.
 */
use axum::extract::State;

use crate::backend::comments::db::{self, CommentWithAuthor};
use crate::backend::error::BackendError;
use crate::backend::extract::{JsonBody, PathParam};
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db::get_post;
use crate::backend::server::database::Database;
use crate::shared::{ApiResponse, CommentView, CreateCommentRequest};

const POST_NOT_FOUND: &str = "post not found";

/// Comment on a post
///
/// `POST /comments`
pub async fn create_comment(
    State(database): State<Database>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreateCommentRequest>,
) -> Result<ApiResponse<CommentView>, BackendError> {
    request.validate()?;

    get_post(database.pool(), request.post_id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    let comment = db::create_comment(database.pool(), user.user_id, request.post_id, &request.content)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                BackendError::not_found(POST_NOT_FOUND).with_detail(db_err.message())
            }
            other => BackendError::from(other),
        })?;

    tracing::info!(
        comment_id = comment.id,
        post_id = comment.post_id,
        user_id = user.user_id,
        "Comment created"
    );

    Ok(ApiResponse::success(201, "comment created successfully", comment.view()))
}

/// List the comments of a post
///
/// `GET /comments/post/{post_id}`
pub async fn list_post_comments(
    State(database): State<Database>,
    PathParam(post_id): PathParam<i64>,
) -> Result<ApiResponse<Vec<CommentView>>, BackendError> {
    get_post(database.pool(), post_id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    let comments = db::list_comments_for_post(database.pool(), post_id).await?;
    let views = comments.iter().map(CommentWithAuthor::view).collect();

    Ok(ApiResponse::success(200, "comments fetched successfully", views))
}
