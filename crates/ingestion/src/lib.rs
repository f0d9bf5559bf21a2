//! Data ingestion for the cardamom analytics system.
//!
//! This crate handles:
//! - CSV auction history exports (header-addressed columns)
//! - Date and price parsing into validated observations
//! - Malformed-record filtering with skip accounting

pub mod loader;

pub use loader::{read_raw_from_reader, read_raw_records, LoadStats, ObservationLoader};
