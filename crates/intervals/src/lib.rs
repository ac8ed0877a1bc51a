//! Producer award intervals.
//!
//! Given the winning records of an award list, this crate finds the
//! producer(s) with the shortest and the longest gap between two
//! consecutive wins.
//!
//! ## Architecture
//! The computation runs in stages:
//! 1. The tokenizer splits each record's producer field into names
//! 2. The aggregator groups winning years per producer and derives the gaps
//! 3. The gaps at the global minimum and maximum form the IntervalReport
//!
//! The crate does no I/O. Winners come from the caller, either as a slice
//! or through a [`WinnerSource`].
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::WinningRecord;
//! use intervals::compute_intervals;
//!
//! let winners = vec![
//!     WinningRecord::new(1990, "Steve Perry and Joel Silver"),
//!     WinningRecord::new(1991, "Joel Silver"),
//! ];
//!
//! let report = compute_intervals(&winners);
//! assert_eq!(report.min_interval(), Some(1));
//! ```

pub mod traits;
pub mod tokenizer;
pub mod aggregator;
pub mod report;

// Re-export main types
pub use traits::WinnerSource;
pub use tokenizer::tokenize;
pub use aggregator::{
    compute_intervals, consecutive_intervals, group_win_years, select_extremes, ProducerWinYears,
};
pub use report::{IntervalRecord, IntervalReport};

/// Compute the report over everything a source currently holds
pub fn compute_from_source(source: &dyn WinnerSource) -> IntervalReport {
    let winners = source.winning_records();
    tracing::debug!(
        "Computing intervals from {} ({} winning records)",
        source.name(),
        winners.len()
    );
    compute_intervals(&winners)
}
