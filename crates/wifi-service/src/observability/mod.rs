//! Observability for the wifi service.
//!
//! Provides metrics definitions and recording helpers.

pub mod metrics;
