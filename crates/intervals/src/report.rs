//! Result types returned by the interval computation.

use data_loader::{ProducerName, Year};
use serde::{Deserialize, Serialize};

/// The gap between two consecutive wins of one producer.
///
/// Built through [`IntervalRecord::between`], which keeps
/// `interval == following_win - previous_win` and
/// `previous_win < following_win`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalRecord {
    pub producer: ProducerName,
    pub interval: Year,
    pub previous_win: Year,
    pub following_win: Year,
}

impl IntervalRecord {
    /// Record the gap between two wins.
    ///
    /// Returns `None` unless `following_win` is strictly after `previous_win`.
    pub fn between(producer: impl Into<ProducerName>, previous_win: Year, following_win: Year) -> Option<Self> {
        let interval = following_win.checked_sub(previous_win).filter(|&gap| gap > 0)?;
        Some(Self {
            producer: producer.into(),
            interval,
            previous_win,
            following_win,
        })
    }
}

/// Producers with the shortest and longest gap between consecutive wins.
///
/// Serializes as `{"min": [...], "max": [...]}`. Both lists are empty when
/// no producer won in two different years.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalReport {
    #[serde(rename = "min")]
    pub minimum: Vec<IntervalRecord>,
    #[serde(rename = "max")]
    pub maximum: Vec<IntervalRecord>,
}

impl IntervalReport {
    /// Report for a dataset without any repeat winner
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.minimum.is_empty() && self.maximum.is_empty()
    }

    /// The global minimum interval, if any
    pub fn min_interval(&self) -> Option<Year> {
        self.minimum.first().map(|record| record.interval)
    }

    /// The global maximum interval, if any
    pub fn max_interval(&self) -> Option<Year> {
        self.maximum.first().map(|record| record.interval)
    }
}
