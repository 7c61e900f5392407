//! Repository layer for the wifi service.
//!
//! Follows the Handler -> Service -> Repository architecture. The service
//! depends only on [`WifiRecordStore`]; the concrete store is chosen at
//! startup and injected.

pub mod memory;
pub mod wifi_records;

pub use memory::InMemoryWifiRecordStore;
pub use wifi_records::PgWifiRecordRepository;

use crate::errors::WifiError;
use crate::models::{NewWifiRecord, WifiRecord};

/// Storage contract for Wi-Fi records (enables mocking).
///
/// `mac` is unique across the store: `save` fails with
/// [`WifiError::Database`] when it collides with an existing row.
#[async_trait::async_trait]
pub trait WifiRecordStore: Send + Sync {
    /// Persist a new record, assigning its identifier.
    async fn save(&self, record: NewWifiRecord) -> Result<WifiRecord, WifiError>;

    /// All records, in storage-defined order.
    async fn find_all(&self) -> Result<Vec<WifiRecord>, WifiError>;

    /// The record with this MAC, if any.
    async fn find_by_mac(&self, mac: &str) -> Result<Option<WifiRecord>, WifiError>;

    /// Delete the record with this MAC. Returns the number of rows removed (0 or 1).
    async fn delete_by_mac(&self, mac: &str) -> Result<u64, WifiError>;

    /// Verify the store is reachable.
    async fn ping(&self) -> Result<(), WifiError>;
}
