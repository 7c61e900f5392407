//! Wifi Sightings Service Library
//!
//! A small HTTP service that records observed Wi-Fi networks (SSID, MAC,
//! security, signal strength) together with the address of the client that
//! reported them.
//!
//! # Architecture
//!
//! Handler -> Service -> Repository:
//!
//! ```text
//! routes/mod.rs -> handlers/*.rs -> services/*.rs -> repositories/*.rs
//! ```
//!
//! # Modules
//!
//! - `config` - Service configuration from environment
//! - `errors` - Error types with HTTP status code mapping
//! - `handlers` - HTTP request handlers
//! - `middleware` - HTTP middleware (metrics)
//! - `models` - Record entity and request types
//! - `observability` - Prometheus metrics
//! - `repositories` - Record storage (PostgreSQL and in-memory)
//! - `routes` - Axum router setup
//! - `services` - Record operations

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod routes;
pub mod services;
