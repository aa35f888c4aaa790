//! Ranking export functionality
//!
//! Non-interactive renderings of a [`Ranking`](crate::analysis::Ranking):
//! a plain-text bar chart for terminals and pipes, and a JSON document for
//! other tools.

pub mod json;
pub mod table;

pub use json::write_json;
pub use table::write_table;
