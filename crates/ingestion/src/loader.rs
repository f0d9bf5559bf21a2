//! CSV loading for auction history exports.
//!
//! Reads delimited exports with a header row, addressing the two required
//! columns by name so column order and extra columns do not matter. Two
//! paths are provided: a typed path that parses dates and prices into
//! validated observations (skipping and counting malformed rows), and a raw
//! path that yields records verbatim for analyses that match on the
//! unparsed date string.

use cardamom_core::{Error, PriceObservation, RawAuctionRecord, Result, DATE_FORMAT};
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Required date column in the export header.
pub const COL_AUCTION_DATE: &str = "auction_date";
/// Required price column in the export header.
pub const COL_AVG_PRICE: &str = "avg_price_per_kg";

/// Statistics about a load pass over the export.
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Total data rows seen.
    pub total_records: u64,
    /// Rows that produced a valid observation.
    pub loaded: u64,
    /// Rows skipped because the price field did not parse as a valid price.
    pub skipped_bad_price: u64,
    /// Rows skipped because the date field did not parse.
    pub skipped_bad_date: u64,
}

impl LoadStats {
    /// Total rows skipped for any reason.
    pub fn skipped(&self) -> u64 {
        self.skipped_bad_price + self.skipped_bad_date
    }

    /// Reset statistics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Loader that parses auction exports into validated observations.
///
/// Malformed rows are excluded, never represented as zero; the loader
/// counts what it drops so callers can surface the loss.
#[derive(Debug, Default)]
pub struct ObservationLoader {
    /// Load statistics, accumulated across calls until reset.
    stats: LoadStats,
}

impl ObservationLoader {
    /// Create a new loader with zeroed statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load observations from a CSV file on disk.
    pub fn load_file(&mut self, path: &Path) -> Result<Vec<PriceObservation>> {
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file))
    }

    /// Load observations from any CSV reader.
    pub fn load_reader<R: Read>(&mut self, reader: R) -> Result<Vec<PriceObservation>> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        ensure_required_columns(csv_reader.headers()?)?;

        let mut observations = Vec::new();
        for record in csv_reader.deserialize() {
            let record: RawAuctionRecord = record?;
            self.stats.total_records += 1;
            if let Some(observation) = self.parse_record(&record) {
                observations.push(observation);
                self.stats.loaded += 1;
            }
        }
        Ok(observations)
    }

    /// Parse one raw record, counting the reason when it is dropped.
    fn parse_record(&mut self, record: &RawAuctionRecord) -> Option<PriceObservation> {
        let date = match NaiveDate::parse_from_str(record.auction_date.trim(), DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => {
                self.stats.skipped_bad_date += 1;
                debug!(date = %record.auction_date, "skipping record with unparseable date");
                return None;
            }
        };
        let price = match record.avg_price_per_kg.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => price,
            _ => {
                self.stats.skipped_bad_price += 1;
                debug!(price = %record.avg_price_per_kg, "skipping record with invalid price");
                return None;
            }
        };
        Some(PriceObservation {
            date,
            price_per_kg: price,
        })
    }

    /// Get load statistics.
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

/// Read raw records from a CSV file on disk, fields verbatim.
pub fn read_raw_records(path: &Path) -> Result<Vec<RawAuctionRecord>> {
    let file = File::open(path)?;
    read_raw_from_reader(BufReader::new(file))
}

/// Read raw records from any CSV reader, fields verbatim.
pub fn read_raw_from_reader<R: Read>(reader: R) -> Result<Vec<RawAuctionRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    ensure_required_columns(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for record in csv_reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// Fail early with a clear message when a required column is absent.
fn ensure_required_columns(headers: &csv::StringRecord) -> Result<()> {
    for required in [COL_AUCTION_DATE, COL_AVG_PRICE] {
        if !headers.iter().any(|header| header == required) {
            return Err(Error::data(format!(
                "missing required column '{required}'"
            )));
        }
    }
    Ok(())
}
