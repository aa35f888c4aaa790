//! Pre-flight checks for selftime
//!
//! Validates inputs and the output terminal before any work starts, so
//! failures come with actionable messages instead of raw I/O errors.

use anyhow::Result;
use std::io::{self, ErrorKind, IsTerminal};
use std::path::Path;

use crate::domain::{ParseError, TuiError};

/// Run the checks needed before loading `input`
///
/// `interactive` adds the terminal check required by the TUI.
pub fn run_preflight_checks(input: &Path, interactive: bool) -> Result<()> {
    check_input_file(input)?;
    if interactive {
        check_terminal()?;
    }
    Ok(())
}

/// Check that the input exists and is a regular file
///
/// # Errors
/// Returns [`ParseError::Read`], the same error an unreadable file gets from
/// the loader.
pub fn check_input_file(path: &Path) -> Result<(), ParseError> {
    let problem = if !path.exists() {
        io::Error::new(
            ErrorKind::NotFound,
            "input not found; make sure the path points to a profile summary JSON file",
        )
    } else if !path.is_file() {
        io::Error::new(
            ErrorKind::InvalidInput,
            "not a file; FILE must be a profile summary, not a directory",
        )
    } else {
        return Ok(());
    };
    Err(ParseError::Read { path: path.to_path_buf(), source: problem })
}

/// Check that stdout is a terminal the chart can draw on
fn check_terminal() -> Result<(), TuiError> {
    if io::stdout().is_terminal() {
        Ok(())
    } else {
        Err(TuiError::NotATerminal)
    }
}
