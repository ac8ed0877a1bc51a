//! Groups winning years by producer and extracts the extreme gaps.
//!
//! ## Algorithm
//! 1. Tokenize every winning record's producer field and fold the
//!    (producer, year) pairs into a producer → years map
//! 2. Sort and de-duplicate each producer's years
//! 3. Emit one IntervalRecord per pair of consecutive years
//! 4. Keep every record at the global minimum and at the global maximum
//!
//! Producers are visited in name order (BTreeMap), so the output order is
//! deterministic: by producer, then chronologically.

use crate::report::{IntervalRecord, IntervalReport};
use crate::tokenizer::tokenize;
use data_loader::{ProducerName, WinningRecord, Year};
use std::collections::BTreeMap;
use tracing::debug;

/// Winning years per producer, each list ascending without repeats
pub type ProducerWinYears = BTreeMap<ProducerName, Vec<Year>>;

/// Producers with the shortest and longest gap between consecutive wins.
///
/// Never fails: records without producers contribute nothing, and a dataset
/// without any repeat winner produces an empty report.
pub fn compute_intervals(winners: &[WinningRecord]) -> IntervalReport {
    let win_years = group_win_years(winners);
    let intervals = consecutive_intervals(&win_years);
    debug!(
        "Computed {} intervals for {} producers from {} winning records",
        intervals.len(),
        win_years.len(),
        winners.len()
    );
    select_extremes(intervals)
}

/// Fold winning records into each producer's winning years.
///
/// A producer credited more than once in the same year keeps a single win
/// for that year.
pub fn group_win_years(winners: &[WinningRecord]) -> ProducerWinYears {
    let grouped = winners
        .iter()
        .flat_map(|record| {
            tokenize(record.producers_raw.as_deref())
                .into_iter()
                .map(move |producer| (producer, record.year))
        })
        .fold(ProducerWinYears::new(), |mut acc, (producer, year)| {
            acc.entry(producer).or_default().push(year);
            acc
        });

    grouped
        .into_iter()
        .map(|(producer, mut years)| {
            years.sort_unstable();
            years.dedup();
            (producer, years)
        })
        .collect()
}

/// One IntervalRecord per pair of consecutive winning years.
///
/// Producers with a single winning year have no previous win to compare
/// against and contribute nothing.
pub fn consecutive_intervals(win_years: &ProducerWinYears) -> Vec<IntervalRecord> {
    win_years
        .iter()
        .filter(|(_, years)| years.len() > 1)
        .flat_map(|(producer, years)| {
            years
                .windows(2)
                .filter_map(move |pair| IntervalRecord::between(producer.as_str(), pair[0], pair[1]))
        })
        .collect()
}

/// Keep the records at the global minimum and maximum interval.
///
/// Both lists preserve the input order. When every record shares the same
/// interval, both lists contain all of them.
pub fn select_extremes(intervals: Vec<IntervalRecord>) -> IntervalReport {
    let (Some(min), Some(max)) = (
        intervals.iter().map(|record| record.interval).min(),
        intervals.iter().map(|record| record.interval).max(),
    ) else {
        return IntervalReport::empty();
    };

    let at = |interval: Year| -> Vec<IntervalRecord> {
        intervals
            .iter()
            .filter(|record| record.interval == interval)
            .cloned()
            .collect()
    };

    IntervalReport {
        minimum: at(min),
        maximum: at(max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_win_years_sorts_and_dedups() {
        let winners = vec![
            WinningRecord::new(2000, "Producer A"),
            WinningRecord::new(1990, "Producer A and Producer B"),
            WinningRecord::new(1990, "Producer A"),
            WinningRecord::without_producers(1995),
        ];

        let grouped = group_win_years(&winners);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["Producer A"], vec![1990, 2000]);
        assert_eq!(grouped["Producer B"], vec![1990]);
    }

    #[test]
    fn test_group_win_years_is_case_sensitive() {
        let winners = vec![
            WinningRecord::new(1990, "Producer A"),
            WinningRecord::new(1995, "producer a"),
        ];

        let grouped = group_win_years(&winners);
        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn test_consecutive_intervals_skips_single_wins() {
        let mut win_years = ProducerWinYears::new();
        win_years.insert("Once".to_string(), vec![1990]);
        win_years.insert("Thrice".to_string(), vec![1990, 1995, 2000]);

        let intervals = consecutive_intervals(&win_years);
        assert_eq!(
            intervals,
            vec![
                IntervalRecord::between("Thrice", 1990, 1995).unwrap(),
                IntervalRecord::between("Thrice", 1995, 2000).unwrap(),
            ]
        );
    }

    #[test]
    fn test_select_extremes_empty() {
        assert!(select_extremes(Vec::new()).is_empty());
    }

    #[test]
    fn test_select_extremes_keeps_ties_in_order() {
        let intervals = vec![
            IntervalRecord::between("A", 1990, 1991).unwrap(),
            IntervalRecord::between("B", 1990, 2000).unwrap(),
            IntervalRecord::between("C", 2001, 2002).unwrap(),
            IntervalRecord::between("D", 1980, 1985).unwrap(),
            IntervalRecord::between("E", 2000, 2010).unwrap(),
        ];

        let report = select_extremes(intervals);
        let min: Vec<_> = report.minimum.iter().map(|r| r.producer.as_str()).collect();
        let max: Vec<_> = report.maximum.iter().map(|r| r.producer.as_str()).collect();
        assert_eq!(min, vec!["A", "C"]);
        assert_eq!(max, vec!["B", "E"]);
    }

    #[test]
    fn test_single_interval_is_both_extremes() {
        let winners = vec![
            WinningRecord::new(1984, "Bo Derek"),
            WinningRecord::new(1990, "Bo Derek"),
        ];

        let report = compute_intervals(&winners);
        let expected = vec![IntervalRecord::between("Bo Derek", 1984, 1990).unwrap()];
        assert_eq!(report.minimum, expected);
        assert_eq!(report.maximum, expected);
    }

    #[test]
    fn test_same_year_credits_do_not_form_an_interval() {
        let winners = vec![WinningRecord::new(1990, "Producer A and Producer A")];
        assert!(compute_intervals(&winners).is_empty());
    }
}
