//! Within-period price stability analysis.
//!
//! Selects records by a period token, averages multiple auction entries
//! recorded on the same day, and summarizes the dispersion of the daily
//! averages.

use cardamom_core::{DailyAverage, RawAuctionRecord, StabilityOutcome, StabilityReport};
use std::collections::BTreeMap;
use tracing::debug;

/// Accumulator for one auction day's entries.
#[derive(Debug, Clone, Copy, Default)]
struct DayBucket {
    sum: f64,
    count: usize,
}

impl DayBucket {
    fn add(&mut self, price: f64) {
        self.sum += price;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Stability analyzer over daily average prices.
pub struct StabilityAnalyzer;

impl StabilityAnalyzer {
    /// Create a new stability analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Average all auction entries per distinct day within the period.
    ///
    /// Records are selected by plain substring match of `period` against
    /// the raw date string, and day identity is the exact raw string; no
    /// structured date comparison happens on this path. Entries whose price
    /// field does not parse as a valid price are dropped silently. Output
    /// is ordered by date key.
    pub fn daily_averages(
        &self,
        records: &[RawAuctionRecord],
        period: &str,
    ) -> Vec<DailyAverage> {
        let mut days: BTreeMap<&str, DayBucket> = BTreeMap::new();
        for record in records {
            if !record.auction_date.contains(period) {
                continue;
            }
            let price = match record.avg_price_per_kg.trim().parse::<f64>() {
                Ok(price) if price.is_finite() && price >= 0.0 => price,
                _ => continue,
            };
            days.entry(record.auction_date.as_str()).or_default().add(price);
        }

        days.into_iter()
            .map(|(date_key, bucket)| DailyAverage {
                date_key: date_key.to_string(),
                mean_price: bucket.mean(),
                entry_count: bucket.count,
            })
            .collect()
    }

    /// Summarize price stability over the period's daily averages.
    ///
    /// Dispersion is the population standard deviation (divide by `n`, not
    /// `n - 1`): the period's auction days are the whole population of
    /// interest, not a sample from a larger one. Fewer than two distinct
    /// days cannot support a dispersion statistic and yield the sparse
    /// outcomes instead of a report.
    pub fn analyze(&self, records: &[RawAuctionRecord], period: &str) -> StabilityOutcome {
        let averages = self.daily_averages(records, period);
        if averages.is_empty() {
            return StabilityOutcome::NoData;
        }
        let n = averages.len();
        if n < 2 {
            return StabilityOutcome::InsufficientDays { days: n };
        }

        let values: Vec<f64> = averages.iter().map(|day| day.mean_price).collect();
        let n_f = n as f64;
        let mean = values.iter().sum::<f64>() / n_f;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n_f;
        let std_dev = variance.sqrt();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        debug!(days = n, mean, std_dev, "computed stability statistics");

        StabilityOutcome::Report(StabilityReport {
            period: period.to_string(),
            auction_days: n,
            mean_price: mean,
            std_dev,
            min_price: min,
            max_price: max,
        })
    }
}

impl Default for StabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
