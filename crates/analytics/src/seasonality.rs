//! Monthly seasonality profiling.
//!
//! Pools observations across all years by calendar month and classifies
//! each month as strong, weak, or neutral against the overall mean.

use cardamom_core::config::SeasonalityConfig;
use cardamom_core::{MonthlyAggregate, PriceObservation, SeasonalityReport};
use tracing::debug;

/// Accumulator for one calendar month's observations.
#[derive(Debug, Clone, Copy, Default)]
struct MonthBucket {
    sum: f64,
    count: usize,
}

impl MonthBucket {
    fn add(&mut self, price: f64) {
        self.sum += price;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Seasonal aggregator that classifies months against the long-run mean.
pub struct SeasonalAggregator {
    /// Multiplier over the overall mean above which a month is strong.
    strong_factor: f64,
    /// Multiplier over the overall mean below which a month is weak.
    weak_factor: f64,
}

impl SeasonalAggregator {
    /// Create a new aggregator from configuration.
    pub fn new(config: &SeasonalityConfig) -> Self {
        Self {
            strong_factor: config.strong_factor,
            weak_factor: config.weak_factor,
        }
    }

    /// Compute the seasonality profile over the full observation set.
    ///
    /// Years are pooled: every observation lands in one of twelve calendar
    /// month buckets. The overall mean weights each non-empty month equally
    /// regardless of its observation count, so sparse months are not
    /// drowned out by busy ones. Empty input yields an empty report with an
    /// undefined overall mean.
    pub fn analyze(&self, observations: &[PriceObservation]) -> SeasonalityReport {
        let mut buckets = [MonthBucket::default(); 12];
        for observation in observations {
            buckets[(observation.month() - 1) as usize].add(observation.price_per_kg);
        }

        let monthly: Vec<MonthlyAggregate> = buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| bucket.count > 0)
            .map(|(index, bucket)| MonthlyAggregate {
                month: index as u32 + 1,
                mean_price: bucket.mean(),
                observation_count: bucket.count,
            })
            .collect();

        if monthly.is_empty() {
            return SeasonalityReport {
                monthly,
                overall_mean: None,
                strong_months: Vec::new(),
                weak_months: Vec::new(),
            };
        }

        let overall =
            monthly.iter().map(|m| m.mean_price).sum::<f64>() / monthly.len() as f64;
        debug!(
            months = monthly.len(),
            overall_mean = overall,
            "computed monthly means"
        );

        // Strict inequalities: a month exactly at a threshold is neutral.
        let strong_months = monthly
            .iter()
            .filter(|m| m.mean_price > overall * self.strong_factor)
            .map(|m| m.month)
            .collect();
        let weak_months = monthly
            .iter()
            .filter(|m| m.mean_price < overall * self.weak_factor)
            .map(|m| m.month)
            .collect();

        SeasonalityReport {
            monthly,
            overall_mean: Some(overall),
            strong_months,
            weak_months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    fn make_obs(year: i32, month: u32, day: u32, price: f64) -> PriceObservation {
        PriceObservation {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            price_per_kg: price,
        }
    }

    fn aggregator() -> SeasonalAggregator {
        SeasonalAggregator::new(&SeasonalityConfig::default())
    }

    #[test]
    fn test_partition_into_monthly_means() {
        let observations = vec![
            make_obs(2025, 1, 5, 100.0),
            make_obs(2025, 1, 12, 200.0),
            make_obs(2025, 3, 7, 300.0),
        ];
        let report = aggregator().analyze(&observations);

        assert_eq!(report.monthly.len(), 2);
        assert_eq!(report.monthly[0].month, 1);
        assert_abs_diff_eq!(report.monthly[0].mean_price, 150.0, epsilon = 1e-10);
        assert_eq!(report.monthly[0].observation_count, 2);
        assert_eq!(report.monthly[1].month, 3);
        assert_abs_diff_eq!(report.monthly[1].mean_price, 300.0, epsilon = 1e-10);

        // No observation lost or duplicated across buckets.
        let bucketed: usize = report.monthly.iter().map(|m| m.observation_count).sum();
        assert_eq!(bucketed, observations.len());
    }

    #[test]
    fn test_multi_year_pooling() {
        let observations = vec![
            make_obs(2023, 6, 10, 100.0),
            make_obs(2024, 6, 15, 200.0),
            make_obs(2025, 6, 20, 300.0),
        ];
        let report = aggregator().analyze(&observations);

        assert_eq!(report.monthly.len(), 1);
        assert_eq!(report.monthly[0].month, 6);
        assert_eq!(report.monthly[0].observation_count, 3);
        assert_abs_diff_eq!(report.monthly[0].mean_price, 200.0, epsilon = 1e-10);
    }

    #[test]
    fn test_strong_and_weak_classification() {
        // Means: 90, 100, 110 -> overall 100; thresholds 105 and 95.
        let observations = vec![
            make_obs(2025, 2, 1, 90.0),
            make_obs(2025, 5, 1, 100.0),
            make_obs(2025, 8, 1, 110.0),
        ];
        let report = aggregator().analyze(&observations);

        assert_abs_diff_eq!(report.overall_mean.unwrap(), 100.0, epsilon = 1e-10);
        assert_eq!(report.strong_months, vec![8]);
        assert_eq!(report.weak_months, vec![2]);
        assert!(report
            .strong_months
            .iter()
            .all(|m| !report.weak_months.contains(m)));
    }

    #[test]
    fn test_threshold_boundary_is_neutral() {
        // Means: 95, 100, 105 -> overall exactly 100. The edges sit on the
        // thresholds and strict inequality leaves them unclassified.
        let observations = vec![
            make_obs(2025, 1, 1, 95.0),
            make_obs(2025, 2, 1, 100.0),
            make_obs(2025, 3, 1, 105.0),
        ];
        let report = aggregator().analyze(&observations);

        assert!(report.strong_months.is_empty());
        assert!(report.weak_months.is_empty());
    }

    #[test]
    fn test_overall_mean_is_unweighted() {
        // January is busy, February has one auction; both count once.
        let observations = vec![
            make_obs(2025, 1, 2, 10.0),
            make_obs(2025, 1, 9, 10.0),
            make_obs(2025, 1, 16, 10.0),
            make_obs(2025, 2, 6, 20.0),
        ];
        let report = aggregator().analyze(&observations);

        // Unweighted: (10 + 20) / 2, not (30 + 20) / 4.
        assert_abs_diff_eq!(report.overall_mean.unwrap(), 15.0, epsilon = 1e-10);
    }

    #[test]
    fn test_empty_input() {
        let report = aggregator().analyze(&[]);
        assert!(report.is_empty());
        assert!(report.overall_mean.is_none());
        assert!(report.strong_months.is_empty());
        assert!(report.weak_months.is_empty());
    }

    #[test]
    fn test_months_ordered_regardless_of_input_order() {
        let observations = vec![
            make_obs(2025, 11, 3, 100.0),
            make_obs(2025, 2, 3, 100.0),
            make_obs(2025, 7, 3, 100.0),
        ];
        let report = aggregator().analyze(&observations);
        let months: Vec<u32> = report.monthly.iter().map(|m| m.month).collect();
        assert_eq!(months, vec![2, 7, 11]);
    }
}
