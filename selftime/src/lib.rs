//! # selftime - Self-Time Charts for Profiler Summaries
//!
//! selftime reads the JSON summary a self-profiler writes after a run (a
//! total duration plus per-item self-times), ranks the items by the time
//! spent directly in them, and draws a horizontal bar chart annotated with
//! each item's share of the total.
//!
//! A second tool, `selftime-imports`, inspects the import table and the
//! undefined symbols of a compiled object file.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │    Loader    │──▶│   Ranking    │──▶│     TUI      │
//! │ profile_data │   │  (analysis)  │   │  (terminal)  │
//! └──────────────┘   └──────────────┘   └──────────────┘
//!                            │
//!                            ▼
//!                    ┌──────────────┐
//!                    │    Export    │
//!                    │ (text, JSON) │
//!                    └──────────────┘
//! ```
//!
//! The three stages run once, in order: parse → rank → render. Nothing is
//! kept between invocations.
//!
//! ## Module Structure
//!
//! - [`profile_data`]: parse the JSON dump into a [`ProfileReport`](profile_data::ProfileReport)
//! - [`analysis`]: sort, convert to milliseconds, cumulative rescale, top-N cut
//! - [`tui`]: interactive bar chart with ratatui
//! - [`export`]: headless text chart and JSON export of the ranking
//! - [`inspect`]: object file import inspection
//! - [`cli`]: command-line argument parsing
//! - [`preflight`]: input and terminal checks
//! - [`domain`]: core domain types and errors
//!
//! ## Input Format
//!
//! ```json
//! {
//!   "total_time": {"secs": 10, "nanos": 0},
//!   "query_data": [
//!     {"label": "typeck", "self_time": {"secs": 5, "nanos": 0}},
//!     {"label": "mir_borrowck", "self_time": {"secs": 3, "nanos": 0}}
//!   ]
//! }
//! ```
//!
//! Every `{secs, nanos}` pair means `secs + nanos / 1e9` seconds.
//!
//! ## Typical Usage
//!
//! ```bash
//! # Interactive chart of the 50 largest items
//! selftime summary.json
//!
//! # Text chart of the top 20, plus a JSON copy of the ranking
//! selftime summary.json --top 20 --headless --export ranked.json
//!
//! # Undefined symbols of an object file, demangled
//! selftime-imports target/debug/deps/foo.o --demangle
//! ```

pub mod analysis;
pub mod cli;
pub mod domain;
pub mod export;
pub mod inspect;
pub mod preflight;
pub mod profile_data;
pub mod tui;
