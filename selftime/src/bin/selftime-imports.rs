//! # selftime-imports - Object File Import Listing
//!
//! Prints the import table and the undefined symbols of one object file.
//! `--clear` drops the imported-function list afterwards; the file on disk
//! is never modified.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use selftime::cli::ImportsArgs;
use selftime::inspect::ObjectImports;

fn main() -> Result<()> {
    env_logger::init();
    let args = ImportsArgs::parse();

    let mut obj = ObjectImports::parse_file(&args.object)
        .with_context(|| format!("Failed to inspect {}", args.object.display()))?;

    println!("{}: {} {}", args.object.display(), obj.format(), obj.architecture());

    println!("imports ({}):", obj.imports().len());
    for import in obj.imports() {
        println!("  {}", import.display_name(args.demangle));
    }

    println!("imported symbols ({}):", obj.imported_symbols().len());
    for sym in obj.imported_symbols() {
        let weak = if sym.weak { " (weak)" } else { "" };
        println!("  {:<8} {}{weak}", sym.kind, sym.display_name(args.demangle));
    }

    if args.clear {
        let removed = obj.clear_imported_functions();
        info!("Cleared {removed} imported functions (in memory only)");
        println!("cleared: {removed} imports, {} remaining", obj.imports().len());
    }

    Ok(())
}
