//! Report rendering.
//!
//! Pure text rendering for both analyses so output can be asserted
//! byte-for-byte in tests. Prices print in rupees with two decimals;
//! rounding happens only here, at presentation.

use cardamom_core::{month_name, SeasonalityReport, StabilityOutcome};

/// Render the seasonality profile: monthly table, overall mean, and the
/// strong/weak classifications.
pub fn render_seasonality(report: &SeasonalityReport) -> String {
    if report.is_empty() {
        return "No auction data available for seasonality analysis.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("--- Monthly Average Prices (All Time) ---\n");
    for aggregate in &report.monthly {
        out.push_str(&format!(
            "{}: ₹{:.2}\n",
            month_name(aggregate.month),
            aggregate.mean_price
        ));
    }

    if let Some(overall) = report.overall_mean {
        out.push_str(&format!("\nOverall Average: ₹{overall:.2}\n"));
    }

    out.push_str("\nHistorically Strong Months (Sell Opportunity):\n");
    for month in &report.strong_months {
        out.push_str(&format!("- {}\n", month_name(*month)));
    }

    out.push_str("\nHistorically Weak Months (Caution):\n");
    for month in &report.weak_months {
        out.push_str(&format!("- {}\n", month_name(*month)));
    }

    out
}

/// Render a stability outcome, including the two sparse-data messages.
pub fn render_stability(outcome: &StabilityOutcome) -> String {
    match outcome {
        StabilityOutcome::NoData => "No data found for the specified period.\n".to_string(),
        StabilityOutcome::InsufficientDays { days } => {
            format!("Not enough data days ({days}) to calculate stability.\n")
        }
        StabilityOutcome::Report(report) => {
            let mut out = String::new();
            out.push_str(&format!("Results for {}:\n", report.period));
            out.push_str(&format!("Total auction days: {}\n", report.auction_days));
            out.push_str(&format!("Mean Price: ₹{:.2}\n", report.mean_price));
            out.push_str(&format!(
                "Stability Level (Std Dev): ± ₹{:.2}\n",
                report.std_dev
            ));
            out.push_str(&format!(
                "Price Range: ₹{:.2} - ₹{:.2}\n",
                report.min_price, report.max_price
            ));
            out
        }
    }
}
