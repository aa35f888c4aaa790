//! Profile data models
//!
//! Loads the JSON summary written by a self-profiler into an immutable
//! [`ProfileReport`]. Only the fields the chart needs are read; everything
//! else in the dump is ignored.

use log::{debug, info, warn};
use serde::Deserialize;
use std::path::Path;

use crate::domain::{ParseError, SpanTime};

/// One labeled item and the time spent directly in it
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    pub label: String,
    pub self_time_seconds: f64,
    /// Number of times the item ran, when the dump records it
    pub invocation_count: Option<u64>,
}

/// Internal data model for a profile dump (immutable, loaded from file)
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileReport {
    pub total_time_seconds: f64,
    pub records: Vec<ProfileRecord>,
}

// On-disk layout. Unknown fields are skipped so richer dumps still load.
#[derive(Debug, Deserialize)]
struct RawReport {
    total_time: SpanTime,
    query_data: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    label: String,
    self_time: SpanTime,
    #[serde(default)]
    invocation_count: Option<u64>,
}

impl From<RawRecord> for ProfileRecord {
    fn from(raw: RawRecord) -> Self {
        Self {
            label: raw.label,
            self_time_seconds: raw.self_time.as_secs_f64(),
            invocation_count: raw.invocation_count,
        }
    }
}

impl ProfileReport {
    /// Parse a profile dump from disk
    ///
    /// # Errors
    /// Returns [`ParseError::Read`] if the file cannot be read and
    /// [`ParseError::Malformed`] if it is not a valid profile dump.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| ParseError::Read { path: path.to_path_buf(), source })?;
        debug!("Read {} bytes from {}", content.len(), path.display());

        let report = Self::from_json_str(&content)?;
        info!("Loaded {} records from {}", report.records.len(), path.display());
        Ok(report)
    }

    /// Parse a profile dump from an in-memory JSON string
    ///
    /// # Errors
    /// Returns [`ParseError::Malformed`] if the JSON is invalid or a required
    /// field (`total_time`, `query_data`, `label`, `self_time`) is missing.
    pub fn from_json_str(json: &str) -> Result<Self, ParseError> {
        let raw: RawReport = serde_json::from_str(json)?;
        debug!("Profile total time {}, {} entries", raw.total_time, raw.query_data.len());

        let report = Self {
            total_time_seconds: raw.total_time.as_secs_f64(),
            records: raw.query_data.into_iter().map(ProfileRecord::from).collect(),
        };

        if report.records.is_empty() {
            warn!("Profile contains no query_data entries");
        }
        // Not enforced, only reported
        let self_sum = report.self_time_sum();
        if self_sum > report.total_time_seconds {
            warn!(
                "Sum of self times ({self_sum:.3}s) exceeds total time ({:.3}s)",
                report.total_time_seconds
            );
        }

        Ok(report)
    }

    /// Sum of all record self-times in seconds
    #[must_use]
    pub fn self_time_sum(&self) -> f64 {
        self.records.iter().map(|r| r.self_time_seconds).sum()
    }
}
