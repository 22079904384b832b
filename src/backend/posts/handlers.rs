/**
 * Post Handlers
 *
 * `GET /posts` and `GET /posts/{id}` are public. Creating, updating and
 * deleting require a bearer token, and only the owner may change or delete
 * a post.
 *
 * For update and delete the existence check runs before the ownership check:
 * a missing post is 404 for everyone, an existing one owned by somebody else
 * is 403.
 */
use axum::extract::State;

use crate::backend::comments::db::{list_comments_for_post, CommentWithAuthor};
use crate::backend::error::BackendError;
use crate::backend::extract::{JsonBody, PathParam};
use crate::backend::middleware::AuthUser;
use crate::backend::posts::db::{self, PostWithAuthor};
use crate::backend::server::database::Database;
use crate::shared::{ApiResponse, CreatePostRequest, PostView, UpdatePostRequest};

const POST_NOT_FOUND: &str = "post not found";

/// List all posts with their authors
///
/// `GET /posts`
pub async fn list_posts(
    State(database): State<Database>,
) -> Result<ApiResponse<Vec<PostView>>, BackendError> {
    let posts = db::list_posts(database.pool()).await?;
    let views = posts.iter().map(PostWithAuthor::view).collect();

    Ok(ApiResponse::success(200, "posts fetched successfully", views))
}

/// Fetch one post with its author and comments
///
/// `GET /posts/{id}`
pub async fn get_post(
    State(database): State<Database>,
    PathParam(id): PathParam<i64>,
) -> Result<ApiResponse<PostView>, BackendError> {
    let post = db::get_post_with_author(database.pool(), id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    let comments = list_comments_for_post(database.pool(), id).await?;

    let view = PostView {
        comments: Some(comments.iter().map(CommentWithAuthor::view).collect()),
        ..post.view()
    };

    Ok(ApiResponse::success(200, "post fetched successfully", view))
}

/// Create a post owned by the caller
///
/// `POST /create-post`
pub async fn create_post(
    State(database): State<Database>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<CreatePostRequest>,
) -> Result<ApiResponse<PostView>, BackendError> {
    request.validate()?;

    let post = db::create_post(database.pool(), user.user_id, &request.title, &request.content)
        .await?;

    tracing::info!(post_id = post.id, user_id = user.user_id, "Post created");

    Ok(ApiResponse::success(201, "post created successfully", post.view()))
}

/// Update title and/or content of the caller's post
///
/// `PUT /upposts/{id}`
pub async fn update_post(
    State(database): State<Database>,
    AuthUser(user): AuthUser,
    PathParam(id): PathParam<i64>,
    JsonBody(request): JsonBody<UpdatePostRequest>,
) -> Result<ApiResponse<PostView>, BackendError> {
    let current = db::get_post(database.pool(), id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    user.ensure_owns(current.user_id, "you can only update your own posts")?;

    let (title, content) = request.resolve(&current.title, &current.content);

    // Deleted between the read and the write
    let updated = db::update_post(database.pool(), id, &title, &content)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    tracing::info!(post_id = id, user_id = user.user_id, "Post updated");

    Ok(ApiResponse::success(200, "post updated successfully", updated.view()))
}

/// Soft-delete the caller's post
///
/// `DELETE /delposts/{id}`
pub async fn delete_post(
    State(database): State<Database>,
    AuthUser(user): AuthUser,
    PathParam(id): PathParam<i64>,
) -> Result<ApiResponse<()>, BackendError> {
    let post = db::get_post(database.pool(), id)
        .await?
        .ok_or_else(|| BackendError::not_found(POST_NOT_FOUND))?;

    user.ensure_owns(post.user_id, "you can only delete your own posts")?;

    if !db::soft_delete_post(database.pool(), id).await? {
        return Err(BackendError::not_found(POST_NOT_FOUND));
    }

    tracing::info!(post_id = id, user_id = user.user_id, "Post deleted");

    Ok(ApiResponse::empty(200, "post deleted successfully"))
}
