//! HTTP metrics middleware.
//!
//! Captures metrics for every HTTP response, including framework-level
//! errors produced before a handler runs:
//! - 415 Unsupported Media Type
//! - 404 Not Found
//! - 405 Method Not Allowed
//! - 408 Request Timeout (from the timeout layer)

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::observability::metrics::record_http_request;

/// Middleware that records method, normalized path, status and duration.
///
/// Applied as the outermost layer so it sees every response.
pub async fn http_metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status_code = response.status().as_u16();
    record_http_request(&method, &path, status_code, duration);

    response
}
