//! Statistical analyses for the cardamom analytics system.
//!
//! This crate handles:
//! - Monthly seasonality profiling (strong/weak month classification)
//! - Within-period price stability (dispersion of daily averages)

pub mod seasonality;
pub mod stability;

pub use seasonality::SeasonalAggregator;
pub use stability::StabilityAnalyzer;
