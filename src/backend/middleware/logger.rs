/**
 * Request Logging Middleware
 *
 * Emits one `tracing` event per request with method, path, status, latency
 * and the client address. Applied to every route, public or protected.
 */

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};

/// Request logger
///
/// The client address is only known when the server was started with
/// `into_make_service_with_connect_info::<SocketAddr>()`; otherwise it is
/// logged as `-`.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let client_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = started.elapsed().as_secs_f64() * 1000.0;

    if response.status().is_server_error() {
        tracing::error!(%method, %uri, status, latency_ms, %client_ip, "request failed");
    } else {
        tracing::info!(%method, %uri, status, latency_ms, %client_ip, "request completed");
    }

    response
}
