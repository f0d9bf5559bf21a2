//! Core data types for the cardamom analytics system.

use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used by auction history exports (e.g. "17-12-2025").
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Display name for a calendar month (1 = January).
///
/// Out-of-range numbers render as "Unknown" rather than panicking.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

/// One row of an auction history export, fields exactly as recorded.
///
/// Either field may be malformed; parsing happens downstream so that
/// analyses which match on the raw date string can see it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAuctionRecord {
    /// Auction date string (expected day-month-year, see [`DATE_FORMAT`]).
    pub auction_date: String,
    /// Average price per kg as recorded (decimal string).
    pub avg_price_per_kg: String,
}

/// A single validated auction price observation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceObservation {
    /// Calendar date of the auction.
    pub date: NaiveDate,
    /// Average price per kg. Always finite and non-negative.
    pub price_per_kg: f64,
}

impl PriceObservation {
    /// Calendar month of the observation (1-12).
    #[inline]
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// Mean price for one calendar month, pooled across all years.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// Calendar month (1-12).
    pub month: u32,
    /// Arithmetic mean of all observations in this month.
    pub mean_price: f64,
    /// Number of observations behind the mean.
    pub observation_count: usize,
}

/// Seasonality profile: monthly means classified against the overall mean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalityReport {
    /// One aggregate per month with data, ordered by month.
    pub monthly: Vec<MonthlyAggregate>,
    /// Unweighted mean of the monthly means. `None` when no data.
    pub overall_mean: Option<f64>,
    /// Months whose mean sits above the strong threshold.
    pub strong_months: Vec<u32>,
    /// Months whose mean sits below the weak threshold.
    pub weak_months: Vec<u32>,
}

impl SeasonalityReport {
    /// True when the underlying dataset held no usable observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monthly.is_empty()
    }
}

/// Mean price across all auction entries recorded on one exact date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAverage {
    /// Raw date string shared by the grouped records.
    pub date_key: String,
    /// Arithmetic mean of the day's prices.
    pub mean_price: f64,
    /// Number of auction entries averaged.
    pub entry_count: usize,
}

/// Price stability statistics for one period, over daily averages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityReport {
    /// Period token the records were matched against.
    pub period: String,
    /// Number of distinct auction days. Always >= 2.
    pub auction_days: usize,
    /// Mean of the daily average prices.
    pub mean_price: f64,
    /// Population standard deviation of the daily averages.
    pub std_dev: f64,
    /// Lowest daily average in the period.
    pub min_price: f64,
    /// Highest daily average in the period.
    pub max_price: f64,
}

/// Result of a stability analysis.
///
/// Dispersion is undefined for fewer than two distinct days, so the sparse
/// cases are explicit outcomes rather than degenerate reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StabilityOutcome {
    /// No record matched the requested period.
    NoData,
    /// Records matched, but too few distinct days for a dispersion statistic.
    InsufficientDays {
        /// Distinct auction days found (always 1).
        days: usize,
    },
    /// Full stability report.
    Report(StabilityReport),
}

impl StabilityOutcome {
    /// The report, if the analysis produced one.
    #[inline]
    pub fn report(&self) -> Option<&StabilityReport> {
        match self {
            StabilityOutcome::Report(report) => Some(report),
            _ => None,
        }
    }

    /// True for the two sparse-data outcomes.
    #[inline]
    pub fn is_insufficient(&self) -> bool {
        !matches!(self, StabilityOutcome::Report(_))
    }
}
