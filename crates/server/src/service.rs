//! # Awards Interval Service
//!
//! This module owns a loaded set of award winners and answers the producer
//! interval question for it:
//! 1. Load the award list (or accept any WinnerSource)
//! 2. Compute the min/max interval report on first request
//! 3. Hand out the cached report, or its JSON rendering
//!
//! The source is immutable once wrapped in the service, so a report computed
//! once stays valid for the service's lifetime.

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use data_loader::AwardIndex;
use intervals::{IntervalReport, WinnerSource};

use crate::config::ServiceConfig;

/// Serves the producer award interval report for one winner source
#[derive(Clone)]
pub struct AwardsIntervalService {
    source: Arc<dyn WinnerSource>,
    report: Arc<OnceLock<IntervalReport>>,
}

impl AwardsIntervalService {
    /// Create a service over any winner source
    pub fn new(source: Arc<dyn WinnerSource>) -> Self {
        Self {
            source,
            report: Arc::new(OnceLock::new()),
        }
    }

    /// Load the award list named by the configuration and serve it
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let index = AwardIndex::load_from_file(config.csv_path()).with_context(|| {
            format!("Failed to load award list from {}", config.csv_path().display())
        })?;
        Ok(Self::new(Arc::new(index)))
    }

    /// Name of the underlying winner source
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Producers with the shortest and longest gap between consecutive wins.
    ///
    /// Computed on the first call and cached afterwards.
    pub fn producer_intervals(&self) -> &IntervalReport {
        self.report.get_or_init(|| {
            let start_time = Instant::now();
            let report = intervals::compute_from_source(self.source.as_ref());
            info!(
                "Computed producer intervals from {}: {} at minimum {:?}, {} at maximum {:?} in {:.2?}",
                self.source.name(),
                report.minimum.len(),
                report.min_interval(),
                report.maximum.len(),
                report.max_interval(),
                start_time.elapsed()
            );
            report
        })
    }

    /// The report rendered as `{"min": [...], "max": [...]}`
    pub fn report_json(&self, pretty: bool) -> Result<String> {
        let report = self.producer_intervals();
        let json = if pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        json.context("Failed to serialize interval report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::{AwardRecord, WinningRecord};
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::NamedTempFile;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn build_test_index() -> Arc<AwardIndex> {
        let rows = [
            (1990, "The Adventures of Ford Fairlane", "Steve Perry and Joel Silver", true),
            (1990, "Ghosts Can't Do It", "Bo Derek", false),
            (1991, "Hudson Hawk", "Joel Silver", true),
            (2002, "Swept Away", "Matthew Vaughn", true),
            (2015, "Fantastic Four", "Simon Kinberg, Matthew Vaughn and Hutch Parker", true),
        ];
        Arc::new(AwardIndex::from_records(rows.into_iter().map(
            |(year, title, producers, winner)| AwardRecord {
                year,
                title: title.to_string(),
                studios: "Studio".to_string(),
                producers: producers.to_string(),
                winner,
            },
        )))
    }

    /// Counts how often the service asks for winners
    struct CountingSource {
        winners: Vec<WinningRecord>,
        calls: AtomicUsize,
    }

    impl WinnerSource for CountingSource {
        fn name(&self) -> &str {
            "CountingSource"
        }

        fn winning_records(&self) -> Vec<WinningRecord> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.winners.clone()
        }
    }

    // ============================================================================
    // Unit Tests
    // ============================================================================

    #[test]
    fn test_producer_intervals_from_index() {
        let service = AwardsIntervalService::new(build_test_index());

        let report = service.producer_intervals();
        assert_eq!(report.minimum.len(), 1);
        assert_eq!(report.minimum[0].producer, "Joel Silver");
        assert_eq!(report.minimum[0].interval, 1);
        assert_eq!(report.maximum.len(), 1);
        assert_eq!(report.maximum[0].producer, "Matthew Vaughn");
        assert_eq!(report.maximum[0].interval, 13);
        assert_eq!(service.source_name(), "AwardIndex");
    }

    #[test]
    fn test_report_is_computed_once() {
        let source = Arc::new(CountingSource {
            winners: vec![
                WinningRecord::new(1990, "Producer A"),
                WinningRecord::new(1991, "Producer A"),
            ],
            calls: AtomicUsize::new(0),
        });
        let service = AwardsIntervalService::new(source.clone());
        let cloned = service.clone();

        let first = service.producer_intervals().clone();
        let second = cloned.producer_intervals().clone();

        assert_eq!(first, second);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_report_json_uses_min_max_keys() {
        let service = AwardsIntervalService::new(build_test_index());

        let json: serde_json::Value =
            serde_json::from_str(&service.report_json(false).unwrap()).unwrap();
        assert_eq!(json["min"][0]["producer"], "Joel Silver");
        assert_eq!(json["min"][0]["previousWin"], 1990);
        assert_eq!(json["min"][0]["followingWin"], 1991);
        assert_eq!(json["max"][0]["interval"], 13);
    }

    #[test]
    fn test_empty_source_gives_empty_json_lists() {
        let service = AwardsIntervalService::new(Arc::new(Vec::<WinningRecord>::new()));

        assert!(service.producer_intervals().is_empty());
        assert_eq!(service.report_json(false).unwrap(), r#"{"min":[],"max":[]}"#);
    }

    // ============================================================================
    // Integration Tests
    // ============================================================================

    #[test]
    fn test_from_config_loads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "year;title;studios;producers;winner\n\
             1984;Bolero;Cannon Films;Bo Derek;yes\n\
             1990;Ghosts Can't Do It;Triumph Releasing;Bo Derek;yes\n"
        )
        .unwrap();

        let service = AwardsIntervalService::from_config(&ServiceConfig::new(file.path())).unwrap();
        let report = service.producer_intervals();
        assert_eq!(report.min_interval(), Some(6));
        assert_eq!(report.max_interval(), Some(6));
    }

    #[test]
    fn test_from_config_missing_file() {
        let result = AwardsIntervalService::from_config(&ServiceConfig::new("missing/movielist.csv"));
        assert!(result.is_err(), "Should fail for a missing award list");
    }
}
