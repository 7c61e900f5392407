//! Wifi service models.
//!
//! Contains the record entity, the creation request accepted at the API
//! boundary, and the operational response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted Wi-Fi network sighting.
///
/// Maps to the `wifi_records` table. Serialized to clients in camelCase:
///
/// ```json
/// {
///   "id": "0b0c5a0e-8f3c-4f0e-9a53-5c2c0c3b1d6e",
///   "ssid": "home",
///   "mac": "AA:BB:CC:DD:EE:FF",
///   "clientIp": "203.0.113.7",
///   "security": "WPA2",
///   "signalStrength": -40
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WifiRecord {
    /// Generated at insert time; never changes.
    pub id: Uuid,

    /// Network name.
    pub ssid: String,

    /// MAC address of the observed network. Unique across all records.
    pub mac: String,

    /// Address of the HTTP caller that reported the sighting.
    pub client_ip: String,

    /// Security protocol label (free-form, e.g. "WPA2").
    pub security: String,

    /// Signal strength reading.
    pub signal_strength: i32,
}

/// Request body for `POST /networks`.
///
/// Fields not listed here are ignored, so a `clientIp` supplied by the
/// caller never reaches the stored record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWifiRecordRequest {
    pub ssid: String,
    pub mac: String,
    pub security: String,
    pub signal_strength: i32,
}

/// A fully-built record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWifiRecord {
    pub ssid: String,
    pub mac: String,
    pub client_ip: String,
    pub security: String,
    pub signal_strength: i32,
}

impl NewWifiRecord {
    /// Build a record from the caller's request and the connection's address.
    pub fn new(request: CreateWifiRecordRequest, client_ip: String) -> Self {
        Self {
            ssid: request.ssid,
            mac: request.mac,
            client_ip,
            security: request.security,
            signal_strength: request.signal_strength,
        }
    }

    /// Attach an identifier, producing the persisted shape.
    pub fn into_record(self, id: Uuid) -> WifiRecord {
        WifiRecord {
            id,
            ssid: self.ssid,
            mac: self.mac,
            client_ip: self.client_ip,
            security: self.security,
            signal_strength: self.signal_strength,
        }
    }
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
