//! # Data Loader Crate
//!
//! This crate loads the award list and keeps it in memory.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (AwardRecord, WinningRecord, AwardIndex)
//! - **parser**: Parse the `;`-delimited award list into Rust structs
//! - **index**: Build and validate the AwardIndex
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::AwardIndex;
//! use std::path::Path;
//!
//! let index = AwardIndex::load_from_file(Path::new("data/movielist.csv"))?;
//!
//! let (records, winners) = index.counts();
//! println!("{} records, {} winners", records, winners);
//!
//! // Facts consumed by the interval computation
//! let winning = index.winning_records();
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    Year,
    ProducerName,
    // Core types
    AwardRecord,
    WinningRecord,
    AwardIndex,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: Year, producers: &str, winner: bool) -> AwardRecord {
        AwardRecord {
            year,
            title: format!("Movie {}", year),
            studios: "Studio".to_string(),
            producers: producers.to_string(),
            winner,
        }
    }

    #[test]
    fn test_award_index_creation() {
        let index = AwardIndex::new();
        let (records, winners) = index.counts();

        assert_eq!(records, 0);
        assert_eq!(winners, 0);
        assert!(index.year_span().is_none());
    }

    #[test]
    fn test_insert_record() {
        let mut index = AwardIndex::new();
        index.insert_record(record(1980, "Allan Carr", true));

        assert_eq!(index.records().len(), 1);
        let by_year = index.records_by_year(1980);
        assert_eq!(by_year.len(), 1);
        assert_eq!(by_year[0].producers, "Allan Carr");
    }

    #[test]
    fn test_winning_records_only_include_winners() {
        let mut index = AwardIndex::new();
        index.insert_record(record(1980, "Allan Carr", true));
        index.insert_record(record(1980, "Jerry Weintraub", false));
        index.insert_record(record(1981, "Frank Yablans", true));

        let winning = index.winning_records();
        assert_eq!(
            winning,
            vec![
                WinningRecord::new(1980, "Allan Carr"),
                WinningRecord::new(1981, "Frank Yablans"),
            ]
        );
    }

    #[test]
    fn test_empty_queries() {
        let index = AwardIndex::new();

        assert!(index.records_by_year(1999).is_empty());
        assert!(index.winning_records().is_empty());
        assert!(index.winners_ordered_by_producers_and_year().is_empty());
    }
}
