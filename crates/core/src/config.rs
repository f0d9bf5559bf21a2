//! Configuration structures for the cardamom analytics system.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the auction history export.
pub const DEFAULT_DATA_PATH: &str = "assets/historical_data.csv";

/// Default period token (December 2025 within the export date format).
pub const DEFAULT_PERIOD: &str = "-12-2025";

/// Main configuration for an analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Input data configuration.
    pub data: DataConfig,
    /// Seasonality classification configuration.
    pub seasonality: SeasonalityConfig,
    /// Stability analysis configuration.
    pub stability: StabilityConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            seasonality: SeasonalityConfig::default(),
            stability: StabilityConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Check that the configuration can produce well-formed reports.
    pub fn validate(&self) -> Result<()> {
        let seasonality = &self.seasonality;
        if seasonality.strong_factor <= 0.0 || seasonality.weak_factor <= 0.0 {
            return Err(Error::config("threshold factors must be positive"));
        }
        if seasonality.weak_factor > seasonality.strong_factor {
            return Err(Error::config(format!(
                "weak factor {} exceeds strong factor {}; months could classify as both",
                seasonality.weak_factor, seasonality.strong_factor
            )));
        }
        if self.stability.period.is_empty() {
            return Err(Error::config("period token must not be empty"));
        }
        Ok(())
    }
}

/// Input data configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the auction history CSV.
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

/// Seasonality classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalityConfig {
    /// Multiplier over the overall mean above which a month is strong.
    pub strong_factor: f64,
    /// Multiplier over the overall mean below which a month is weak.
    pub weak_factor: f64,
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            strong_factor: 1.05,
            weak_factor: 0.95,
        }
    }
}

/// Stability analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityConfig {
    /// Period token matched against raw auction date strings.
    pub period: String,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.data.path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.seasonality.strong_factor, 1.05);
        assert_eq!(config.seasonality.weak_factor, 0.95);
        assert_eq!(config.stability.period, "-12-2025");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_crossed_factors() {
        let mut config = AnalysisConfig::default();
        config.seasonality.strong_factor = 0.90;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_period() {
        let mut config = AnalysisConfig::default();
        config.stability.period.clear();
        assert!(config.validate().is_err());
    }
}
