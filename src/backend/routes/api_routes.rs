/**
 * API Route Handlers
 *
 * This module wires the blog endpoints onto the router.
 *
 * # Routes
 *
 * ## Public
 * - `POST /register` - Account registration
 * - `POST /login` - Login, returns a bearer token
 * - `GET /posts` - List posts
 * - `GET /posts/{id}` - One post with its comments
 * - `GET /comments/post/{post_id}` - Comments of a post
 *
 * ## Protected (bearer token)
 * - `POST /create-post` - Create a post
 * - `PUT /upposts/{id}` - Update own post
 * - `DELETE /delposts/{id}` - Delete own post
 * - `POST /comments` - Comment on a post
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::backend::auth::{login, register};
use crate::backend::comments::{create_comment, list_post_comments};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts::{create_post, delete_post, get_post, list_posts, update_post};
use crate::backend::server::state::AppState;

/// Configure the routes reachable without a token
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .route("/comments/post/{post_id}", get(list_post_comments))
}

/// Configure the routes behind [`auth_middleware`]
///
/// The guard is attached with `route_layer`, so it only runs for requests
/// that matched one of these routes; unknown paths still reach the fallback.
pub fn configure_protected_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/create-post", post(create_post))
        .route("/upposts/{id}", put(update_post))
        .route("/delposts/{id}", delete(delete_post))
        .route("/comments", post(create_comment))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(protected)
}
