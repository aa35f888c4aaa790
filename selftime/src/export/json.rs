//! JSON export of a ranking, for scripts and later comparison.

use serde::Serialize;
use std::io::Write;

use crate::analysis::Ranking;
use crate::domain::ExportError;

/// Exported document: the ranking plus where it came from
#[derive(Debug, Serialize)]
struct RankingDocument<'a> {
    source: &'a str,
    #[serde(rename = "displayTimeUnit")]
    display_time_unit: &'static str,
    #[serde(flatten)]
    ranking: &'a Ranking,
}

/// Write `ranking` as pretty-printed JSON
///
/// # Errors
/// Returns an error if serialization or the underlying write fails
pub fn write_json<W: Write>(ranking: &Ranking, source: &str, mut writer: W) -> Result<(), ExportError> {
    let doc = RankingDocument { source, display_time_unit: "ms", ranking };
    serde_json::to_writer_pretty(&mut writer, &doc)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
