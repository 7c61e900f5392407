//! Wifi records repository for PostgreSQL.
//!
//! # Security
//!
//! - All queries use parameterized statements (SQL injection safe)
//! - Uniqueness of `mac` is enforced by the `wifi_records_mac_key` constraint,
//!   not by a prior lookup, so concurrent inserts cannot both succeed

use crate::errors::WifiError;
use crate::models::{NewWifiRecord, WifiRecord};
use crate::observability::metrics;
use crate::repositories::WifiRecordStore;
use sqlx::PgPool;
use std::time::Instant;
use tracing::instrument;

/// Wifi records repository backed by a Postgres pool.
#[derive(Clone)]
pub struct PgWifiRecordRepository {
    pool: PgPool,
}

impl PgWifiRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get reference to the database pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Record the query outcome and convert the error, if any.
fn observe<T>(
    operation: &str,
    start: Instant,
    result: Result<T, sqlx::Error>,
) -> Result<T, WifiError> {
    let duration = start.elapsed();
    match result {
        Ok(value) => {
            metrics::record_db_query(operation, "success", duration);
            Ok(value)
        }
        Err(e) => {
            metrics::record_db_query(operation, "error", duration);
            Err(WifiError::from(e))
        }
    }
}

#[async_trait::async_trait]
impl WifiRecordStore for PgWifiRecordRepository {
    #[instrument(skip_all, name = "wifi.repo.save")]
    async fn save(&self, record: NewWifiRecord) -> Result<WifiRecord, WifiError> {
        let start = Instant::now();

        let result = sqlx::query_as::<_, WifiRecord>(
            r#"
            INSERT INTO wifi_records (ssid, mac, client_ip, security, signal_strength)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, ssid, mac, client_ip, security, signal_strength
            "#,
        )
        .bind(&record.ssid)
        .bind(&record.mac)
        .bind(&record.client_ip)
        .bind(&record.security)
        .bind(record.signal_strength)
        .fetch_one(&self.pool)
        .await;

        observe("save", start, result)
    }

    #[instrument(skip_all, name = "wifi.repo.find_all")]
    async fn find_all(&self) -> Result<Vec<WifiRecord>, WifiError> {
        let start = Instant::now();

        let result = sqlx::query_as::<_, WifiRecord>(
            r#"
            SELECT id, ssid, mac, client_ip, security, signal_strength
            FROM wifi_records
            "#,
        )
        .fetch_all(&self.pool)
        .await;

        observe("find_all", start, result)
    }

    #[instrument(skip_all, name = "wifi.repo.find_by_mac")]
    async fn find_by_mac(&self, mac: &str) -> Result<Option<WifiRecord>, WifiError> {
        let start = Instant::now();

        let result = sqlx::query_as::<_, WifiRecord>(
            r#"
            SELECT id, ssid, mac, client_ip, security, signal_strength
            FROM wifi_records
            WHERE mac = $1
            "#,
        )
        .bind(mac)
        .fetch_optional(&self.pool)
        .await;

        observe("find_by_mac", start, result)
    }

    #[instrument(skip_all, name = "wifi.repo.delete_by_mac")]
    async fn delete_by_mac(&self, mac: &str) -> Result<u64, WifiError> {
        let start = Instant::now();

        let result = sqlx::query(
            r#"
            DELETE FROM wifi_records
            WHERE mac = $1
            "#,
        )
        .bind(mac)
        .execute(&self.pool)
        .await
        .map(|done| done.rows_affected());

        observe("delete_by_mac", start, result)
    }

    #[instrument(skip_all, name = "wifi.repo.ping")]
    async fn ping(&self) -> Result<(), WifiError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(all(test, feature = "postgres-tests"))]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::CreateWifiRecordRequest;

    fn new_record(mac: &str) -> NewWifiRecord {
        NewWifiRecord::new(
            CreateWifiRecordRequest {
                ssid: "home".to_string(),
                mac: mac.to_string(),
                security: "WPA2".to_string(),
                signal_strength: -40,
            },
            "127.0.0.1".to_string(),
        )
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_save_assigns_id(pool: PgPool) -> Result<(), anyhow::Error> {
        let repo = PgWifiRecordRepository::new(pool);

        let saved = repo.save(new_record("AA:BB:CC:DD:EE:FF")).await?;

        assert!(!saved.id.is_nil());
        assert_eq!(saved.mac, "AA:BB:CC:DD:EE:FF");
        assert_eq!(saved.client_ip, "127.0.0.1");
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_save_duplicate_mac_fails(pool: PgPool) -> Result<(), anyhow::Error> {
        let repo = PgWifiRecordRepository::new(pool.clone());

        repo.save(new_record("AA:BB:CC:DD:EE:FF")).await?;
        let second = repo.save(new_record("AA:BB:CC:DD:EE:FF")).await;

        assert!(matches!(second, Err(WifiError::Database(msg)) if msg.contains("wifi_records_mac_key")));

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM wifi_records WHERE mac = $1")
                .bind("AA:BB:CC:DD:EE:FF")
                .fetch_one(&pool)
                .await?;
        assert_eq!(count, 1);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_find_by_mac_and_delete(pool: PgPool) -> Result<(), anyhow::Error> {
        let repo = PgWifiRecordRepository::new(pool);

        let saved = repo.save(new_record("11:22:33:44:55:66")).await?;

        let found = repo.find_by_mac("11:22:33:44:55:66").await?;
        assert_eq!(found, Some(saved));

        assert_eq!(repo.delete_by_mac("11:22:33:44:55:66").await?, 1);
        assert_eq!(repo.delete_by_mac("11:22:33:44:55:66").await?, 0);
        assert_eq!(repo.find_by_mac("11:22:33:44:55:66").await?, None);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_find_all(pool: PgPool) -> Result<(), anyhow::Error> {
        let repo = PgWifiRecordRepository::new(pool);

        assert!(repo.find_all().await?.is_empty());

        repo.save(new_record("00:00:00:00:00:01")).await?;
        repo.save(new_record("00:00:00:00:00:02")).await?;

        let mut macs: Vec<String> = repo.find_all().await?.into_iter().map(|r| r.mac).collect();
        macs.sort();
        assert_eq!(macs, vec!["00:00:00:00:00:01", "00:00:00:00:00:02"]);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_ping(pool: PgPool) -> Result<(), anyhow::Error> {
        let repo = PgWifiRecordRepository::new(pool);
        repo.ping().await?;
        Ok(())
    }
}
