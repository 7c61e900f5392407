//! Test server harness for E2E testing
//!
//! Provides `TestWifiServer` for spawning real wifi-service instances in tests.

use metrics_exporter_prometheus::PrometheusBuilder;
use sqlx::PgPool;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use wifi_service::config::Config;
use wifi_service::repositories::{InMemoryWifiRecordStore, PgWifiRecordRepository, WifiRecordStore};
use wifi_service::routes::{self, AppState};
use wifi_service::services::WifiRecordService;

/// Test harness for spawning the wifi service in E2E tests.
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_list_flow() -> Result<(), anyhow::Error> {
///     let server = TestWifiServer::spawn_in_memory().await?;
///
///     let response = reqwest::get(format!("{}/networks", server.url())).await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestWifiServer {
    addr: SocketAddr,
    store: Arc<dyn WifiRecordStore>,
    config: Config,
    _handle: JoinHandle<()>,
}

impl TestWifiServer {
    /// Spawn a server backed by a fresh in-memory store.
    pub async fn spawn_in_memory() -> Result<Self, anyhow::Error> {
        Self::spawn_with_store(Arc::new(InMemoryWifiRecordStore::new())).await
    }

    /// Spawn a server backed by PostgreSQL (typically a `#[sqlx::test]` pool).
    pub async fn spawn(pool: PgPool) -> Result<Self, anyhow::Error> {
        Self::spawn_with_store(Arc::new(PgWifiRecordRepository::new(pool))).await
    }

    /// Spawn a server over an arbitrary store.
    ///
    /// The server will:
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Start the HTTP server in the background
    pub async fn spawn_with_store(store: Arc<dyn WifiRecordStore>) -> Result<Self, anyhow::Error> {
        let vars = HashMap::from([
            (
                "DATABASE_URL".to_string(),
                "postgresql://test/test".to_string(),
            ),
            ("BIND_ADDRESS".to_string(), "127.0.0.1:0".to_string()),
        ]);

        let config = Config::from_vars(&vars)
            .map_err(|e| anyhow::anyhow!("Failed to create config: {}", e))?;

        let state = Arc::new(AppState {
            service: WifiRecordService::new(store.clone()),
            config: config.clone(),
        });

        // Standalone recorder: installing a global one would fail on the
        // second server spawned in the same test process.
        let metrics_handle = PrometheusBuilder::new().build_recorder().handle();

        let app = routes::build_routes(state, metrics_handle);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let handle = tokio::spawn(async move {
            let make_service = app.into_make_service_with_connect_info::<SocketAddr>();
            if let Err(e) = axum::serve(listener, make_service).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            store,
            config,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Direct access to the store behind the server.
    pub fn store(&self) -> &Arc<dyn WifiRecordStore> {
        &self.store
    }

    /// Get reference to the server configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Drop for TestWifiServer {
    fn drop(&mut self) {
        self._handle.abort();
    }
}

/// A valid creation body for `POST /networks`.
pub fn network_body(ssid: &str, mac: &str, security: &str, signal_strength: i32) -> serde_json::Value {
    serde_json::json!({
        "ssid": ssid,
        "mac": mac,
        "security": security,
        "signalStrength": signal_strength,
    })
}
