//! Structured error types for selftime
//!
//! Using thiserror for automatic Display implementation and error chaining.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a profile dump into a report.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read profile {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure while loading an object file for import inspection.
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Failed to read object file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse object file: {0}")]
    Parse(#[source] object::Error),

    #[error("Failed to read import table: {0}")]
    Imports(#[source] object::Error),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write ranking: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize ranking: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum TuiError {
    #[error("stdout is not a terminal; rerun with --headless to print the chart as text")]
    NotATerminal,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
