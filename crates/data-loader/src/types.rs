//! Core domain types for the award records dataset.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (Year, ProducerName)
//! - Structs with public fields
//! - `Option<T>` for values that may be absent
//! - Derive macros for common traits
//! - Vec and BTreeMap for ordered lookups

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Calendar year of an award ceremony
pub type Year = u16;

/// A single producer name extracted from a record's producer field
pub type ProducerName = String;

// =============================================================================
// Record Types
// =============================================================================

/// One row of the award list: a nominated movie for a given year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecord {
    pub year: Year,
    pub title: String,
    pub studios: String,
    /// Free text, possibly naming several producers
    /// ("Allan Carr", "Steve Perry and Joel Silver", ...)
    pub producers: String,
    pub winner: bool,
}

/// The fact the interval computation consumes: a winning year and the raw
/// producer field of that win.
///
/// `producers_raw` is `None` when the upstream source had no producer field
/// at all; an empty string is also accepted and yields no producers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningRecord {
    pub year: Year,
    pub producers_raw: Option<String>,
}

impl WinningRecord {
    pub fn new(year: Year, producers_raw: impl Into<String>) -> Self {
        Self {
            year,
            producers_raw: Some(producers_raw.into()),
        }
    }

    /// A winning record whose producer field is missing
    pub fn without_producers(year: Year) -> Self {
        Self {
            year,
            producers_raw: None,
        }
    }
}

impl From<&AwardRecord> for WinningRecord {
    fn from(record: &AwardRecord) -> Self {
        Self {
            year: record.year,
            producers_raw: Some(record.producers.clone()),
        }
    }
}

// =============================================================================
// AwardIndex - The In-Memory Award Store
// =============================================================================

/// Holds every loaded award record plus a year index.
///
/// Records are kept in insertion (file) order. The year index stores
/// positions into `records`, sorted by year through the BTreeMap.
#[derive(Debug)]
pub struct AwardIndex {
    pub(crate) records: Vec<AwardRecord>,
    /// Positions of records grouped by ceremony year
    pub(crate) year_index: BTreeMap<Year, Vec<usize>>,
}

impl AwardIndex {
    /// Creates a new, empty AwardIndex
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            year_index: BTreeMap::new(),
        }
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[AwardRecord] {
        &self.records
    }

    /// Winning records only, in insertion order
    pub fn winners(&self) -> impl Iterator<Item = &AwardRecord> {
        self.records.iter().filter(|record| record.winner)
    }

    /// Winners converted into the facts consumed by the interval computation
    pub fn winning_records(&self) -> Vec<WinningRecord> {
        self.winners().map(WinningRecord::from).collect()
    }

    /// Winners sorted by their raw producer field, then by year
    pub fn winners_ordered_by_producers_and_year(&self) -> Vec<&AwardRecord> {
        let mut winners: Vec<&AwardRecord> = self.winners().collect();
        winners.sort_by(|a, b| {
            a.producers
                .cmp(&b.producers)
                .then_with(|| a.year.cmp(&b.year))
        });
        winners
    }

    /// All records of a ceremony year
    pub fn records_by_year(&self, year: Year) -> Vec<&AwardRecord> {
        self.year_index
            .get(&year)
            .map(|positions| positions.iter().map(|&i| &self.records[i]).collect())
            .unwrap_or_default()
    }

    /// First and last ceremony year present, if any
    pub fn year_span(&self) -> Option<(Year, Year)> {
        let first = *self.year_index.keys().next()?;
        let last = *self.year_index.keys().next_back()?;
        Some((first, last))
    }

    /// Insert a record and update the year index
    pub fn insert_record(&mut self, record: AwardRecord) {
        let position = self.records.len();
        self.year_index
            .entry(record.year)
            .or_insert_with(Vec::new)
            .push(position);
        self.records.push(record);
    }

    /// Get (records, winners) counts for debugging/validation
    pub fn counts(&self) -> (usize, usize) {
        (self.records.len(), self.winners().count())
    }
}

impl Default for AwardIndex {
    fn default() -> Self {
        Self::new()
    }
}
