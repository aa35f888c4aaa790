//! # Object File Import Inspection
//!
//! Loads a compiled object file and exposes what it expects the linker or
//! loader to resolve for it:
//!
//! - **Imports**: the format's import table. ELF reports undefined dynamic
//!   symbols, Mach-O its bound and lazy imports, PE its import directory.
//!   Relocatable objects (`.o`) usually have an empty import table.
//! - **Imported symbols**: every named undefined entry of the symbol table.
//!   For a `.o` this is the list of symbols still waiting for relocation.
//!
//! The three operations are independent library calls:
//!
//! ```rust,ignore
//! let mut obj = ObjectImports::parse_file("target/debug/deps/foo.o")?;
//! for sym in obj.imported_symbols() {
//!     println!("{}", sym.display_name(true));
//! }
//! let dropped = obj.clear_imported_functions(); // in memory only
//! ```
//!
//! **Libraries used**:
//! - `object`: ELF / Mach-O / COFF / PE parser
//! - `rustc-demangle`: readable Rust symbol names

pub mod imports;

pub use imports::{ImportedFunction, ImportedSymbol, ObjectImports};
