//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

use crate::analysis::DEFAULT_TOP_ITEMS;

#[derive(Parser, Debug)]
#[command(
    name = "selftime",
    version,
    about = "Chart the items with the most self-time in a profiler summary",
    after_help = "\
EXAMPLES:
    selftime summary.json                       Interactive bar chart of the top 50 items
    selftime summary.json --top 20 --headless   Print the top 20 as a text chart
    selftime summary.json --export ranked.json  Also save the ranked table as JSON"
)]
pub struct Args {
    /// Profile summary JSON (`total_time` + `query_data`)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of items to chart, largest self-time first
    #[arg(long, default_value_t = DEFAULT_TOP_ITEMS, value_parser = parse_top)]
    pub top: usize,

    /// Print the chart to stdout instead of opening the TUI
    #[arg(long)]
    pub headless: bool,

    /// Write the ranked table to FILE as JSON
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_top(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "selftime-imports",
    version,
    about = "List the imports and imported symbols of an object file"
)]
pub struct ImportsArgs {
    /// Object file to inspect (ELF, Mach-O, COFF or PE)
    #[arg(value_name = "OBJECT")]
    pub object: PathBuf,

    /// Drop the imported-function list after printing it (in memory only)
    #[arg(long)]
    pub clear: bool,

    /// Demangle Rust symbol names
    #[arg(short, long)]
    pub demangle: bool,
}
