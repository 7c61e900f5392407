//! Prometheus metrics endpoint handler.
//!
//! This endpoint is unauthenticated so Prometheus can scrape it. Labels are
//! bounded and carry no record data (MAC addresses are normalized away).

use axum::{extract::State, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

/// Handler for GET /metrics
///
/// Returns 200 OK with Prometheus text format:
/// ```text
/// # TYPE wifi_http_requests_total counter
/// wifi_http_requests_total{method="GET",endpoint="/networks",status_code="200"} 42
/// ```
#[tracing::instrument(skip_all, name = "wifi.metrics.scrape")]
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    handle.render()
}
