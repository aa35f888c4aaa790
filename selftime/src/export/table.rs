//! Plain-text bar chart.
//!
//! ```text
//! Time spent in each item (total 10.000s, 2 of 2 items)
//!   #  Item  Milliseconds
//!   1  a     ##############################   5000.00 ms  50.00%
//!   2  b     ##################               3000.00 ms  30.00%
//! ```

// Bar widths are small display quantities
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use std::io::{self, Write};

use crate::analysis::{format_percentage, Ranking};

/// Width of the longest bar in characters
pub const BAR_WIDTH: usize = 30;

/// Longest label printed before truncation
const MAX_LABEL_WIDTH: usize = 40;

/// Number of bar characters for `value` against `max` over `width` columns
#[must_use]
pub fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let len = (value / max * width as f64).round() as usize;
    len.min(width)
}

fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() > max_len {
        let kept: String = label.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        label.to_string()
    }
}

/// Write `ranking` as a text bar chart, one line per item
///
/// # Errors
/// Returns any error from the underlying writer
pub fn write_table<W: Write>(ranking: &Ranking, mut writer: W) -> io::Result<()> {
    writeln!(
        writer,
        "Time spent in each item (total {:.3}s, {} of {} items)",
        ranking.total_time_seconds,
        ranking.items.len(),
        ranking.total_items
    )?;

    let label_width = ranking
        .items
        .iter()
        .map(|item| item.label.chars().count())
        .max()
        .unwrap_or(0)
        .clamp("Item".len(), MAX_LABEL_WIDTH);
    let rank_width = ranking.items.len().to_string().len();

    writeln!(writer, "{:>rank_width$}  {:<label_width$}  Milliseconds", "#", "Item")?;

    let max_ms = ranking.max_self_time_ms();
    for item in &ranking.items {
        let bar = "#".repeat(bar_len(item.self_time_ms, max_ms, BAR_WIDTH));
        writeln!(
            writer,
            "{:>rank_width$}  {:<label_width$}  {bar:<BAR_WIDTH$} {:>10.2} ms  {:>7}",
            item.rank.0,
            truncate_label(&item.label, label_width),
            item.self_time_ms,
            format_percentage(item.percentage),
        )?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rank_items;
    use crate::profile_data::{ProfileRecord, ProfileReport};

    fn ranking() -> Ranking {
        let report = ProfileReport {
            total_time_seconds: 10.0,
            records: vec![
                ProfileRecord { label: "b".into(), self_time_seconds: 3.0, invocation_count: None },
                ProfileRecord { label: "a".into(), self_time_seconds: 5.0, invocation_count: None },
            ],
        };
        rank_items(&report, 50)
    }

    #[test]
    fn test_bar_len() {
        assert_eq!(bar_len(5.0, 10.0, 30), 15);
        assert_eq!(bar_len(10.0, 10.0, 30), 30);
        assert_eq!(bar_len(0.0, 10.0, 30), 0);
        assert_eq!(bar_len(1.0, 0.0, 30), 0);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("a_very_long_label", 10), "a_very_...");
    }

    #[test]
    fn test_write_table_lists_items_in_rank_order() {
        let mut out = Vec::new();
        write_table(&ranking(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("total 10.000s, 2 of 2 items"));
        assert!(lines[2].contains(" a "));
        assert!(lines[2].contains("5000.00 ms"));
        assert!(lines[2].ends_with("50.00%"));
        assert!(lines[3].contains(" b "));
        assert!(lines[3].ends_with("30.00%"));
        // Largest item gets the full bar
        assert!(lines[2].contains(&"#".repeat(BAR_WIDTH)));
        assert!(!lines[3].contains(&"#".repeat(BAR_WIDTH)));
    }
}
