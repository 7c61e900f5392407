//! # Wifi Test Utilities
//!
//! Shared test utilities for the wifi service.
//!
//! This crate provides:
//! - Server test harness (`TestWifiServer` for E2E tests)
//! - Request body helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wifi_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), anyhow::Error> {
//!     let server = TestWifiServer::spawn_in_memory().await?;
//!     let client = reqwest::Client::new();
//!
//!     let response = client
//!         .get(format!("{}/networks", server.url()))
//!         .send()
//!         .await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

pub mod server_harness;

pub use server_harness::*;
