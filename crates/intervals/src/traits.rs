//! The seam between the interval computation and whatever supplies winners.

use data_loader::{AwardIndex, WinningRecord};

/// Supplies the winning records the interval computation consumes.
///
/// ## Design Note
/// - `Send + Sync` lets a source be shared behind an `Arc` by the service layer
/// - Implementations return winners only; filtering out non-winning records
///   is the source's job
pub trait WinnerSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    /// All winning records, in the source's natural order
    fn winning_records(&self) -> Vec<WinningRecord>;
}

impl WinnerSource for AwardIndex {
    fn name(&self) -> &str {
        "AwardIndex"
    }

    fn winning_records(&self) -> Vec<WinningRecord> {
        AwardIndex::winning_records(self)
    }
}

/// A fixed list of winners, handy for fixtures and callers that already
/// filtered their data.
impl WinnerSource for Vec<WinningRecord> {
    fn name(&self) -> &str {
        "WinningRecordList"
    }

    fn winning_records(&self) -> Vec<WinningRecord> {
        self.clone()
    }
}
