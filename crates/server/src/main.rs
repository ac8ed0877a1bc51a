//! Simple harness for the awards interval service.
//!
//! Loads the award list named by `AWARDS_CSV_PATH` (default
//! `data/movielist.csv`), logs the report and prints it as JSON.

use anyhow::Result;
use tracing::info;

use server::{AwardsIntervalService, ServiceConfig};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,server=debug,intervals=debug")),
        )
        .init();

    info!("Starting awards interval service harness");

    let config = ServiceConfig::from_env();
    info!("Loading award list from {}", config.csv_path().display());
    let service = AwardsIntervalService::from_config(&config)?;

    let report = service.producer_intervals();
    for record in &report.minimum {
        info!(
            "min: {} won in {} and {} ({} years)",
            record.producer, record.previous_win, record.following_win, record.interval
        );
    }
    for record in &report.maximum {
        info!(
            "max: {} won in {} and {} ({} years)",
            record.producer, record.previous_win, record.following_win, record.interval
        );
    }

    println!("{}", service.report_json(true)?);
    Ok(())
}
