//! AwardIndex building and validation logic.
//!
//! This module builds the AwardIndex from a parsed award list:
//! - Insert every record (this also fills the year index)
//! - Validate data integrity
//! - Log what was loaded

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl AwardIndex {
    /// Load the award list from a `;`-delimited file
    ///
    /// Steps:
    /// 1. Parse the file into records
    /// 2. Insert every record
    /// 3. Validate data integrity
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading award list from {:?}", path);

        let records = parser::parse_award_records(path)?;
        let index = Self::from_records(records);
        index.validate()?;

        let (records, winners) = index.counts();
        info!("Loaded {} award records ({} winners)", records, winners);
        Ok(index)
    }

    /// Build an index from already parsed records
    pub fn from_records(records: impl IntoIterator<Item = AwardRecord>) -> Self {
        let mut index = AwardIndex::new();
        for record in records {
            index.insert_record(record);
        }
        index
    }

    /// Validate data integrity
    ///
    /// Check that every record has a year after year zero and a title.
    pub fn validate(&self) -> Result<()> {
        for record in &self.records {
            if record.year == 0 {
                return Err(DataLoadError::InvalidValue {
                    field: "year".to_string(),
                    value: record.year.to_string(),
                });
            }
            if record.title.is_empty() {
                return Err(DataLoadError::ValidationError(format!(
                    "record from {} has an empty title",
                    record.year
                )));
            }
        }
        Ok(())
    }
}
