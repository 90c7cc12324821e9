//! Request logging middleware.
//!
//! Purely observational: logs every request on the way in and again on the
//! way out with the response status, without ever altering the response.
//! The finish line fires on success and failure alike - handler errors
//! become responses before they reach this layer, and their messages are
//! logged at the `AppError` conversion point.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Middleware that logs request start and finish for every request.
pub async fn request_log_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    tracing::info!("request started: {method} {path}");
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();

    if status.is_server_error() {
        tracing::error!("request failed: {method} {path} -> {status}");
    }
    tracing::info!("request finished: {method} {path} -> {status} ({elapsed_ms}ms)");

    response
}
