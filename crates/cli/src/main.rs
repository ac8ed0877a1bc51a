use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::AwardIndex;
use intervals::{IntervalRecord, consecutive_intervals, group_win_years};
use server::{AwardsIntervalService, ServiceConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Awards - producer award interval report
#[derive(Parser)]
#[command(name = "awards")]
#[command(about = "Find the producers with the shortest and longest gap between award wins", long_about = None)]
struct Cli {
    /// Path to the `;`-delimited award list
    #[arg(short, long, default_value = server::config::DEFAULT_CSV_PATH)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show producers with the shortest and longest gap between consecutive wins
    Intervals {
        /// Print the report as JSON ({"min": [...], "max": [...]})
        #[arg(long)]
        json: bool,
    },

    /// List winning records
    Winners {
        /// Order by producers, then year, instead of file order
        #[arg(long)]
        ordered: bool,
    },

    /// Show the winning years of one producer
    Producer {
        /// Exact (case-sensitive) producer name
        #[arg(long)]
        name: String,
    },

    /// Show dataset statistics
    Stats,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::new(cli.data_file);

    let start = Instant::now();
    let index = Arc::new(
        AwardIndex::load_from_file(config.csv_path())
            .with_context(|| format!("Failed to load award list from {}", config.csv_path().display()))?,
    );
    tracing::debug!("Loaded award list in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Intervals { json } => handle_intervals(index, json)?,
        Commands::Winners { ordered } => handle_winners(&index, ordered),
        Commands::Producer { name } => handle_producer(&index, &name)?,
        Commands::Stats => handle_stats(&index),
    }

    Ok(())
}

/// Handle the 'intervals' command
fn handle_intervals(index: Arc<AwardIndex>, json: bool) -> Result<()> {
    let service = AwardsIntervalService::new(index);

    if json {
        println!("{}", service.report_json(true)?);
        return Ok(());
    }

    let report = service.producer_intervals();
    if report.is_empty() {
        println!("{}", "No producer won more than once.".yellow());
        return Ok(());
    }

    print_intervals("Shortest interval between wins:", &report.minimum);
    println!();
    print_intervals("Longest interval between wins:", &report.maximum);
    Ok(())
}

/// Handle the 'winners' command
fn handle_winners(index: &AwardIndex, ordered: bool) {
    let winners: Vec<_> = if ordered {
        index.winners_ordered_by_producers_and_year()
    } else {
        index.winners().collect()
    };

    println!("{}", format!("{} winning records:", winners.len()).bold().blue());
    for record in winners {
        println!(
            "{} {} [{}] - {}",
            record.year.to_string().green(),
            record.title,
            record.studios,
            record.producers
        );
    }
}

/// Handle the 'producer' command
fn handle_producer(index: &AwardIndex, name: &str) -> Result<()> {
    let mut win_years = group_win_years(&index.winning_records());
    let years = win_years
        .remove(name)
        .ok_or_else(|| anyhow!("Producer '{}' has no winning record", name))?;

    println!("{}", format!("Producer: {}", name).bold().blue());
    let years_str = years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("{}Wins: {} ({})", "• ".green(), years.len(), years_str);

    let mut own = intervals::ProducerWinYears::new();
    own.insert(name.to_string(), years);
    let gaps = consecutive_intervals(&own);
    if gaps.is_empty() {
        println!("{}No repeat win", "• ".cyan());
    }
    for gap in &gaps {
        println!(
            "{}{} -> {}: {} years",
            "• ".cyan(),
            gap.previous_win,
            gap.following_win,
            gap.interval
        );
    }
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(index: &AwardIndex) {
    let (records, winners) = index.counts();
    let win_years = group_win_years(&index.winning_records());
    let repeat_winners = win_years.values().filter(|years| years.len() > 1).count();

    println!("{}", "Award list statistics:".bold().blue());
    println!("{}Records: {}", "• ".green(), records);
    println!("{}Winners: {}", "• ".green(), winners);
    println!("{}Winning producers: {}", "• ".green(), win_years.len());
    println!("{}Producers with repeat wins: {}", "• ".green(), repeat_winners);
    if let Some((first, last)) = index.year_span() {
        println!("{}Years: {}-{}", "• ".green(), first, last);
    }
}

/// Helper function to format and print one side of the report
fn print_intervals(title: &str, records: &[IntervalRecord]) {
    println!("{}", title.bold().blue());
    for (rank, record) in records.iter().enumerate() {
        println!(
            "{}. {} - {} years ({} -> {})",
            (rank + 1).to_string().green(),
            record.producer,
            record.interval,
            record.previous_win,
            record.following_win
        );
    }
}
