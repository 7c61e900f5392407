//! In-memory record store.
//!
//! Honors the same contract as the Postgres repository, including the
//! unique-MAC constraint, so the service and HTTP layers can be exercised
//! without a database.

use crate::errors::WifiError;
use crate::models::{NewWifiRecord, WifiRecord};
use crate::repositories::WifiRecordStore;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local store. Records are kept in insertion order.
#[derive(Default)]
pub struct InMemoryWifiRecordStore {
    records: RwLock<Vec<WifiRecord>>,
}

impl InMemoryWifiRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl WifiRecordStore for InMemoryWifiRecordStore {
    async fn save(&self, record: NewWifiRecord) -> Result<WifiRecord, WifiError> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.mac == record.mac) {
            return Err(WifiError::Database(format!(
                "duplicate key value violates unique constraint \"wifi_records_mac_key\": mac={}",
                record.mac
            )));
        }

        let saved = record.into_record(Uuid::new_v4());
        records.push(saved.clone());
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<WifiRecord>, WifiError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_mac(&self, mac: &str) -> Result<Option<WifiRecord>, WifiError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.mac == mac)
            .cloned())
    }

    async fn delete_by_mac(&self, mac: &str) -> Result<u64, WifiError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.mac != mac);
        Ok((before - records.len()) as u64)
    }

    async fn ping(&self) -> Result<(), WifiError> {
        Ok(())
    }
}
