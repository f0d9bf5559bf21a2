//! Core types and configuration for the cardamom analytics system.
//!
//! This crate provides shared types used across all other crates:
//! - Auction data types (raw records, observations, report shapes)
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use types::*;
