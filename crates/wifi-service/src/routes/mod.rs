//! HTTP routes for the wifi service.
//!
//! Defines the Axum router and application state.

use crate::config::Config;
use crate::handlers;
use crate::middleware::http_metrics_middleware;
use crate::services::WifiRecordService;
use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record service wrapping the injected store.
    pub service: WifiRecordService,

    /// Service configuration.
    pub config: Config,
}

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `/health` - Liveness probe (simple "OK")
/// - `/ready` - Readiness probe (pings the record store)
/// - `/metrics` - Prometheus metrics endpoint
/// - `/networks` - Create (POST) and list (GET) records
/// - `/networks/:mac` - Delete a record by MAC
/// - TraceLayer for request logging
/// - HTTP metrics middleware
/// - Request timeout from configuration
///
/// Must be served with `into_make_service_with_connect_info::<SocketAddr>()`
/// so handlers can read the caller's address.
pub fn build_routes(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let request_timeout = Duration::from_secs(state.config.request_timeout_seconds);

    let app_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route(
            "/networks",
            get(handlers::list_networks).post(handlers::create_network),
        )
        .route("/networks/:mac", delete(handlers::delete_network))
        .with_state(state);

    let metrics_routes = Router::new()
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(metrics_handle);

    // Layer order (bottom-to-top execution):
    // 1. TimeoutLayer - Timeout the request (innermost)
    // 2. TraceLayer - Log request details
    // 3. http_metrics_middleware - Record ALL responses (outermost)
    app_routes
        .merge(metrics_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(http_metrics_middleware))
}
