//! HTTP routing for the status service.
//!
//! There is a single handler, installed as the router fallback so every
//! method and path reaches it. The CORS header is attached by a layer so it
//! is present on error responses too.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod status;

use axum::{middleware, Router};
use http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CORS_ALLOW_ORIGIN;
use crate::middleware::request_id_layer;

/// Creates the Axum router serving the status payload on every route.
pub fn create_router() -> Router {
    with_layers(Router::new().fallback(status::echo_status))
}

/// Wraps `router` in the response header and request ID layers.
///
/// Applies to error responses as well, so a 500 still carries the CORS header.
pub fn with_layers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
