//! Network record handlers.
//!
//! Implements the record endpoints:
//!
//! - `POST /networks` - Record a sighting
//! - `GET /networks` - List all sightings
//! - `DELETE /networks/:mac` - Delete a sighting by MAC address
//!
//! The caller's IP is always taken from the TCP connection; the request
//! body cannot set it.

use crate::errors::WifiError;
use crate::models::{CreateWifiRecordRequest, WifiRecord};
use crate::observability::metrics;
use crate::routes::AppState;
use axum::{
    extract::{ConnectInfo, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Handler for POST /networks
///
/// # Response
///
/// - 200 OK: Created record
/// - 400 Bad Request: Body is not a valid creation request
/// - 500 Internal Server Error: Database error (including a duplicate MAC)
#[instrument(
    skip_all,
    name = "wifi.networks.create",
    fields(method = "POST", endpoint = "/networks")
)]
pub async fn create_network(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    body: axum::body::Bytes,
) -> Result<Json<WifiRecord>, WifiError> {
    // Deserialize manually to return 400 (not Axum's default 422)
    let request: CreateWifiRecordRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(target: "wifi.handlers.networks", error = %e, "Invalid request body");
        metrics::record_network_operation("create", "bad_request");
        WifiError::BadRequest("Invalid request body".to_string())
    })?;

    let record = state
        .service
        .create(request, addr.ip().to_string())
        .await
        .inspect_err(|e| {
            metrics::record_network_operation("create", "error");
            warn!(target: "wifi.handlers.networks", error = %e, "Failed to create record");
        })?;

    metrics::record_network_operation("create", "success");
    info!(
        target: "wifi.handlers.networks",
        id = %record.id,
        mac = %record.mac,
        client_ip = %record.client_ip,
        "Network record created"
    );

    Ok(Json(record))
}

/// Handler for GET /networks
///
/// Returns every stored record; an empty array when there are none.
#[instrument(skip_all, name = "wifi.networks.list", fields(method = "GET", endpoint = "/networks"))]
pub async fn list_networks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WifiRecord>>, WifiError> {
    let records = state.service.find_all().await.inspect_err(|_| {
        metrics::record_network_operation("list", "error");
    })?;

    metrics::record_network_operation("list", "success");
    Ok(Json(records))
}

/// Handler for DELETE /networks/:mac
///
/// # Response
///
/// - 200 OK: The deleted record
/// - 404 Not Found: Empty body; no record matched or it was removed concurrently
#[instrument(
    skip_all,
    name = "wifi.networks.delete",
    fields(method = "DELETE", endpoint = "/networks/{mac}")
)]
pub async fn delete_network(
    State(state): State<Arc<AppState>>,
    Path(mac): Path<String>,
) -> Result<Response, WifiError> {
    let deleted = state.service.delete_by_mac(&mac).await.inspect_err(|_| {
        metrics::record_network_operation("delete", "error");
    })?;

    match deleted {
        Some(record) => {
            metrics::record_network_operation("delete", "success");
            info!(
                target: "wifi.handlers.networks",
                id = %record.id,
                mac = %record.mac,
                "Network record deleted"
            );
            Ok(Json(record).into_response())
        }
        None => {
            metrics::record_network_operation("delete", "not_found");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}
