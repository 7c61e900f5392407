//! Service layer for the wifi service.
//!
//! # Components
//!
//! - `wifi_records` - Record creation, listing and confirmed deletion

pub mod wifi_records;

pub use wifi_records::WifiRecordService;
