//! Command-line entry point for cardamom auction analytics.
//!
//! Two subcommands mirror the two analyses: `seasonality` profiles calendar
//! months across all years of data, `stability` summarizes day-to-day price
//! dispersion within one month/year window. Reports go to stdout; logging
//! goes to stderr so report bytes stay stable.

mod report;

use anyhow::{Context, Result};
use cardamom_analytics::{SeasonalAggregator, StabilityAnalyzer};
use cardamom_core::config::{DEFAULT_DATA_PATH, DEFAULT_PERIOD};
use cardamom_core::AnalysisConfig;
use cardamom_ingestion::{read_raw_records, LoadStats, ObservationLoader};
use clap::{Parser, Subcommand};
use report::{render_seasonality, render_stability};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cardamom",
    version,
    about = "Descriptive analytics over cardamom auction prices"
)]
struct Cli {
    /// Path to the auction history CSV.
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_PATH)]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify calendar months as historically strong, weak, or neutral.
    Seasonality,
    /// Summarize day-to-day price stability within one month/year window.
    Stability {
        /// Period token matched against raw auction dates, e.g. "-12-2025".
        #[arg(short, long, default_value = DEFAULT_PERIOD, allow_hyphen_values = true)]
        period: String,
    },
}

fn main() -> ExitCode {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AnalysisConfig::default();
    config.data.path = cli.file;
    if let Command::Stability { period } = &cli.command {
        config.stability.period = period.clone();
    }
    config.validate()?;

    match cli.command {
        Command::Seasonality => run_seasonality(&config),
        Command::Stability { .. } => run_stability(&config),
    }
}

fn run_seasonality(config: &AnalysisConfig) -> Result<()> {
    let mut loader = ObservationLoader::new();
    let observations = loader
        .load_file(&config.data.path)
        .with_context(|| format!("failed to read {}", config.data.path.display()))?;
    log_load(loader.stats());

    let aggregator = SeasonalAggregator::new(&config.seasonality);
    let report = aggregator.analyze(&observations);
    print!("{}", render_seasonality(&report));
    Ok(())
}

fn run_stability(config: &AnalysisConfig) -> Result<()> {
    let records = read_raw_records(&config.data.path)
        .with_context(|| format!("failed to read {}", config.data.path.display()))?;
    info!(records = records.len(), "loaded raw auction records");

    let analyzer = StabilityAnalyzer::new();
    let outcome = analyzer.analyze(&records, &config.stability.period);
    print!("{}", render_stability(&outcome));
    Ok(())
}

fn log_load(stats: &LoadStats) {
    info!(
        total = stats.total_records,
        loaded = stats.loaded,
        "loaded auction observations"
    );
    if stats.skipped() > 0 {
        warn!(
            bad_price = stats.skipped_bad_price,
            bad_date = stats.skipped_bad_date,
            "excluded records with malformed fields"
        );
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
