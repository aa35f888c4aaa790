//! # selftime - Main Entry Point
//!
//! Supports two output modes:
//! - **TUI** (default): interactive bar chart, blocks until closed
//! - **Headless** (`--headless`): text chart on stdout

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter};

use selftime::analysis::rank_items;
use selftime::cli::Args;
use selftime::domain::ParseError;
use selftime::export::{write_json, write_table};
use selftime::preflight::run_preflight_checks;
use selftime::profile_data::ProfileReport;
use selftime::tui;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_DATAERR: i32 = 65;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ParseError>().is_some() {
        EXIT_DATAERR
    } else {
        EXIT_ERROR
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    run_preflight_checks(&args.file, !args.headless)?;

    let report = ProfileReport::from_file(&args.file)?;
    let ranking = rank_items(&report, args.top);
    info!(
        "Charting {} of {} items, total {:.3}s",
        ranking.items.len(),
        ranking.total_items,
        ranking.total_time_seconds
    );

    let source = args.file.display().to_string();

    if let Some(ref export_path) = args.export {
        let file = File::create(export_path)
            .with_context(|| format!("Failed to create {}", export_path.display()))?;
        write_json(&ranking, &source, BufWriter::new(file)).context("Failed to export ranking")?;
        if !args.quiet {
            eprintln!("saved: {}", export_path.display());
        }
    }

    if args.headless {
        write_table(&ranking, io::stdout().lock()).context("Failed to print chart")?;
    } else {
        tui::App::new(ranking, source).run()?;
    }

    Ok(())
}
