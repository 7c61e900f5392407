//! HTTP request handlers for the wifi service.

pub mod health;
pub mod metrics;
pub mod networks;

pub use health::{health_check, readiness_check};
pub use metrics::metrics_handler;
pub use networks::{create_network, delete_network, list_networks};
