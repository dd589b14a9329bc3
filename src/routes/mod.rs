//! HTTP route handlers.
//!
//! The only application route is `GET /hello`. Anything else is left to
//! axum's defaults (404 for unknown paths, 405 for other methods).
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod hello;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router.
pub fn create_router() -> Router {
    Router::new()
        .route("/hello", get(hello::hello))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
