//! Wifi record service.
//!
//! Builds records from inbound requests and applies the delete policy:
//! a delete is only reported when the store confirms a row was removed.

use crate::errors::WifiError;
use crate::models::{CreateWifiRecordRequest, NewWifiRecord, WifiRecord};
use crate::repositories::WifiRecordStore;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Record operations on top of an injected store.
#[derive(Clone)]
pub struct WifiRecordService {
    store: Arc<dyn WifiRecordStore>,
}

impl WifiRecordService {
    pub fn new(store: Arc<dyn WifiRecordStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn WifiRecordStore> {
        &self.store
    }

    /// Persist a record built from `request`, stamped with `client_ip`.
    #[instrument(skip_all, name = "wifi.service.create")]
    pub async fn create(
        &self,
        request: CreateWifiRecordRequest,
        client_ip: String,
    ) -> Result<WifiRecord, WifiError> {
        self.store.save(NewWifiRecord::new(request, client_ip)).await
    }

    #[instrument(skip_all, name = "wifi.service.find_all")]
    pub async fn find_all(&self) -> Result<Vec<WifiRecord>, WifiError> {
        self.store.find_all().await
    }

    /// Delete the record with `mac`, returning it if this call removed it.
    ///
    /// Returns `None` when no record matched, and also when a record was found
    /// but a concurrent delete removed it before ours ran.
    #[instrument(skip_all, name = "wifi.service.delete_by_mac")]
    pub async fn delete_by_mac(&self, mac: &str) -> Result<Option<WifiRecord>, WifiError> {
        let Some(record) = self.store.find_by_mac(mac).await? else {
            return Ok(None);
        };

        let removed = self.store.delete_by_mac(mac).await?;
        if removed == 0 {
            debug!(target: "wifi.service", mac = %mac, "Record vanished before delete");
            return Ok(None);
        }

        Ok(Some(record))
    }
}
