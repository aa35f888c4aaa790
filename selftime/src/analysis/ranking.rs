//! Self-time ranking for profile reports.
//!
//! Turns a [`ProfileReport`] into the table the chart draws: items sorted by
//! self-time, converted to milliseconds, annotated with their share of the
//! total and with the cumulative-rescale series, then cut to the top N.
//!
//! # Data Flow
//!
//! ```text
//! ProfileReport → sort desc → ×1000 → cumulative_rescale() → take(limit) → Ranking
//! ```
//!
//! The cumulative rescale is computed over every record before truncation, so
//! the values of the top items do not depend on `limit`.

// Percentage and rank calculations intentionally work in f64
#![allow(clippy::cast_precision_loss)]

use log::debug;
use serde::Serialize;

use crate::domain::Rank;
use crate::profile_data::{ProfileRecord, ProfileReport};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Number of items kept after ranking unless the caller asks otherwise.
pub const DEFAULT_TOP_ITEMS: usize = 50;

const MS_PER_SEC: f64 = 1000.0;

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// A ranked item with its derived display values.
///
/// ```text
/// #1 typeck                 ██████████  412.31 ms  41.23%
/// #2 mir_borrowck           ████░░░░░░  180.02 ms  18.00%
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    pub rank: Rank,
    pub label: String,
    pub self_time_seconds: f64,
    pub self_time_ms: f64,
    /// Inverted cumulative self-time, scaled so its peak equals the largest
    /// `self_time_ms`. Zero when the series is degenerate.
    pub rescaled_ms: f64,
    /// Share of the report's total time (0.0 - 100.0).
    pub percentage: f64,
    pub invocation_count: Option<u64>,
}

/// Top items of a report, largest self-time first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub total_time_seconds: f64,
    /// Number of records in the report before truncation.
    pub total_items: usize,
    pub items: Vec<RankedItem>,
}

impl Ranking {
    /// Largest `self_time_ms` among the kept items (0.0 when empty)
    #[must_use]
    pub fn max_self_time_ms(&self) -> f64 {
        self.items.first().map_or(0.0, |item| item.self_time_ms)
    }

    /// Combined share of the total covered by the kept items
    #[must_use]
    pub fn shown_percentage(&self) -> f64 {
        self.items.iter().map(|item| item.percentage).sum()
    }

    /// True when truncation dropped some records
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.items.len() < self.total_items
    }
}

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Percentage of `total_seconds` spent in `self_seconds`.
///
/// Returns 0.0 for a non-positive total instead of dividing by zero.
#[must_use]
pub fn percentage_of_total(self_seconds: f64, total_seconds: f64) -> f64 {
    if total_seconds > 0.0 {
        self_seconds / total_seconds * 100.0
    } else {
        0.0
    }
}

/// Format a percentage the way the chart annotates bars (`"50.00%"`)
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.2}%")
}

/// Inverted, rescaled running sum of a descending series of milliseconds.
///
/// 1. running sum `C`
/// 2. `Cmax - C`
/// 3. scale so the maximum equals `max(values)`
///
/// If either maximum is zero (empty input, a single value, all zeros) every
/// output is 0.0.
#[must_use]
pub fn cumulative_rescale(values_ms: &[f64]) -> Vec<f64> {
    let cumulative: Vec<f64> = values_ms
        .iter()
        .scan(0.0, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect();

    let cumulative_max = cumulative.iter().copied().fold(0.0_f64, f64::max);
    let inverted: Vec<f64> = cumulative.iter().map(|c| cumulative_max - c).collect();

    let inverted_max = inverted.iter().copied().fold(0.0_f64, f64::max);
    let value_max = values_ms.iter().copied().fold(0.0_f64, f64::max);

    if inverted_max <= 0.0 || value_max <= 0.0 {
        return vec![0.0; values_ms.len()];
    }

    let scale = value_max / inverted_max;
    inverted.into_iter().map(|v| v * scale).collect()
}

/// Sort records by self-time, largest first. Ties keep their input order.
fn sorted_by_self_time(records: &[ProfileRecord]) -> Vec<&ProfileRecord> {
    let mut sorted: Vec<&ProfileRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.self_time_seconds.total_cmp(&a.self_time_seconds));
    sorted
}

// =============================================================================
// RANKING
// =============================================================================

/// Rank a report's records by self-time and keep the `limit` largest.
///
/// # Arguments
/// * `report` - The parsed profile
/// * `limit` - Maximum number of items to keep (see [`DEFAULT_TOP_ITEMS`])
///
/// # Returns
/// A [`Ranking`] with `min(records, limit)` items, largest first
#[must_use]
pub fn rank_items(report: &ProfileReport, limit: usize) -> Ranking {
    let sorted = sorted_by_self_time(&report.records);

    let self_times_ms: Vec<f64> = sorted.iter().map(|r| r.self_time_seconds * MS_PER_SEC).collect();
    let rescaled = cumulative_rescale(&self_times_ms);

    let items: Vec<RankedItem> = sorted
        .into_iter()
        .zip(self_times_ms)
        .zip(rescaled)
        .take(limit)
        .enumerate()
        .map(|(idx, ((record, self_time_ms), rescaled_ms))| RankedItem {
            rank: Rank(idx + 1),
            label: record.label.clone(),
            self_time_seconds: record.self_time_seconds,
            self_time_ms,
            rescaled_ms,
            percentage: percentage_of_total(record.self_time_seconds, report.total_time_seconds),
            invocation_count: record.invocation_count,
        })
        .collect();

    debug!("Ranked {} of {} records (limit {limit})", items.len(), report.records.len());

    Ranking {
        total_time_seconds: report.total_time_seconds,
        total_items: report.records.len(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str, seconds: f64) -> ProfileRecord {
        ProfileRecord { label: label.to_string(), self_time_seconds: seconds, invocation_count: None }
    }

    fn report(total: f64, records: Vec<ProfileRecord>) -> ProfileReport {
        ProfileReport { total_time_seconds: total, records }
    }

    #[test]
    fn test_rank_items_sorts_descending() {
        let data = report(10.0, vec![record("b", 3.0), record("a", 5.0), record("c", 1.0)]);
        let ranking = rank_items(&data, DEFAULT_TOP_ITEMS);

        let labels: Vec<&str> = ranking.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        assert_eq!(ranking.items[0].rank, Rank(1));
        assert_eq!(ranking.items[2].rank, Rank(3));
    }

    #[test]
    fn test_rank_items_converts_to_milliseconds() {
        let data = report(10.0, vec![record("a", 1.5)]);
        let ranking = rank_items(&data, DEFAULT_TOP_ITEMS);
        assert!((ranking.items[0].self_time_ms - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_items_percentages() {
        let data = report(10.0, vec![record("a", 5.0), record("b", 3.0)]);
        let ranking = rank_items(&data, DEFAULT_TOP_ITEMS);

        assert_eq!(format_percentage(ranking.items[0].percentage), "50.00%");
        assert_eq!(format_percentage(ranking.items[1].percentage), "30.00%");
    }

    #[test]
    fn test_rank_items_truncates_to_limit() {
        let records: Vec<ProfileRecord> =
            (0..120_i32).map(|i| record(&format!("item{i}"), f64::from(i))).collect();
        let ranking = rank_items(&report(10_000.0, records), DEFAULT_TOP_ITEMS);

        assert_eq!(ranking.items.len(), 50);
        assert_eq!(ranking.total_items, 120);
        assert!(ranking.is_truncated());
        // Kept items are the 50 largest: 119 down to 70
        assert_eq!(ranking.items[0].label, "item119");
        assert_eq!(ranking.items[49].label, "item70");
        assert!(ranking.items.iter().all(|i| i.self_time_seconds >= 70.0));
    }

    #[test]
    fn test_rank_items_fewer_than_limit_is_noop() {
        let data = report(10.0, vec![record("a", 1.0), record("b", 2.0), record("c", 3.0)]);
        let ranking = rank_items(&data, DEFAULT_TOP_ITEMS);
        assert_eq!(ranking.items.len(), 3);
        assert!(!ranking.is_truncated());
    }

    #[test]
    fn test_rank_items_ties_keep_input_order() {
        let data = report(10.0, vec![record("first", 2.0), record("second", 2.0)]);
        let ranking = rank_items(&data, DEFAULT_TOP_ITEMS);
        assert_eq!(ranking.items[0].label, "first");
        assert_eq!(ranking.items[1].label, "second");
    }

    #[test]
    fn test_percentage_independent_of_truncation() {
        let data = report(20.0, vec![record("a", 5.0), record("b", 4.0), record("c", 1.0)]);
        let full = rank_items(&data, DEFAULT_TOP_ITEMS);
        let cut = rank_items(&data, 1);
        assert!((full.items[0].percentage - cut.items[0].percentage).abs() < f64::EPSILON);
        assert!((cut.items[0].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_rescale_values() {
        // cumsum = [5, 8, 10], inverted = [5, 2, 0], scale = 5 / 5
        let rescaled = cumulative_rescale(&[5.0, 3.0, 2.0]);
        assert_eq!(rescaled.len(), 3);
        assert!((rescaled[0] - 5.0).abs() < 1e-9);
        assert!((rescaled[1] - 2.0).abs() < 1e-9);
        assert!(rescaled[2].abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_rescale_peak_matches_largest_value() {
        let rescaled = cumulative_rescale(&[400.0, 300.0, 200.0, 100.0]);
        // inverted = [600, 300, 100, 0], scale = 400 / 600
        let peak = rescaled.iter().copied().fold(0.0_f64, f64::max);
        assert!((peak - 400.0).abs() < 1e-9);
        assert!((rescaled[1] - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_cumulative_rescale_all_zero_is_guarded() {
        let rescaled = cumulative_rescale(&[0.0, 0.0, 0.0]);
        assert_eq!(rescaled, vec![0.0, 0.0, 0.0]);
        assert!(rescaled.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn test_cumulative_rescale_single_and_empty() {
        assert_eq!(cumulative_rescale(&[12.0]), vec![0.0]);
        assert!(cumulative_rescale(&[]).is_empty());
    }

    #[test]
    fn test_rescale_computed_before_truncation() {
        let data = report(10.0, vec![record("a", 0.005), record("b", 0.003), record("c", 0.002)]);
        let full = rank_items(&data, DEFAULT_TOP_ITEMS);
        let cut = rank_items(&data, 2);
        assert!((full.items[1].rescaled_ms - cut.items[1].rescaled_ms).abs() < 1e-9);
        assert!((cut.items[1].rescaled_ms - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_time_gives_zero_percentage() {
        let data = report(0.0, vec![record("a", 1.0)]);
        let ranking = rank_items(&data, DEFAULT_TOP_ITEMS);
        assert!(ranking.items[0].percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_report() {
        let ranking = rank_items(&report(1.0, vec![]), DEFAULT_TOP_ITEMS);
        assert!(ranking.items.is_empty());
        assert!(ranking.max_self_time_ms().abs() < f64::EPSILON);
    }

    #[test]
    fn test_shown_percentage_sums_items() {
        let data = report(10.0, vec![record("a", 5.0), record("b", 3.0)]);
        let ranking = rank_items(&data, DEFAULT_TOP_ITEMS);
        assert!((ranking.shown_percentage() - 80.0).abs() < 1e-9);
    }
}
