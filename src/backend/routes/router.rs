/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - the request logger wraps every route, the fallback included
 * - the auth guard wraps only the protected routes
 */

use axum::{http::Uri, middleware::from_fn, Router};
use tower::ServiceBuilder;

use crate::backend::error::BackendError;
use crate::backend::middleware::request_logger;
use crate::backend::routes::api_routes::{configure_protected_routes, configure_public_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Fallback
///
/// Unknown routes are answered with a 404 error envelope.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_public_routes(Router::new());
    let router = configure_protected_routes(router, &app_state);

    router
        .fallback(route_not_found)
        .layer(ServiceBuilder::new().layer(from_fn(request_logger)))
        .with_state(app_state)
}

async fn route_not_found(uri: Uri) -> BackendError {
    BackendError::not_found("route not found").with_detail(uri.path())
}
