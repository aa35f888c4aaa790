//! Import and undefined-symbol listing for a single object file.

use object::{Object, ObjectSymbol};
use rustc_demangle::demangle;
use std::fs;
use std::path::Path;

use crate::domain::InspectError;

/// Entry of an object's import table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFunction {
    /// Library the function is bound to (empty when the format doesn't say)
    pub library: String,
    pub name: String,
}

/// Undefined symbol the object expects someone else to provide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedSymbol {
    pub name: String,
    pub kind: String,
    pub weak: bool,
}

impl ImportedSymbol {
    /// Symbol name, optionally demangled
    #[must_use]
    pub fn display_name(&self, demangled: bool) -> String {
        if demangled {
            format!("{:#}", demangle(&self.name))
        } else {
            self.name.clone()
        }
    }
}

impl ImportedFunction {
    /// `library!name`, or just the name when no library is recorded
    #[must_use]
    pub fn display_name(&self, demangled: bool) -> String {
        let name =
            if demangled { format!("{:#}", demangle(&self.name)) } else { self.name.clone() };
        if self.library.is_empty() {
            name
        } else {
            format!("{}!{name}", self.library)
        }
    }
}

/// Owned snapshot of the imports of one object file.
///
/// Parsing, enumerating and clearing are independent calls; clearing only
/// affects this snapshot and is never written back to the file.
#[derive(Debug, Clone)]
pub struct ObjectImports {
    format: String,
    architecture: String,
    imports: Vec<ImportedFunction>,
    imported_symbols: Vec<ImportedSymbol>,
}

impl ObjectImports {
    /// Read and parse an object file from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not an object file
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, InspectError> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|source| InspectError::Read { path: path.to_path_buf(), source })?;
        Self::parse(&data)
    }

    /// Parse an object file already in memory
    ///
    /// # Errors
    /// Returns an error if the data is not a supported object format or its
    /// import table is malformed
    pub fn parse(data: &[u8]) -> Result<Self, InspectError> {
        let obj_file = object::File::parse(data).map_err(InspectError::Parse)?;

        let imports = obj_file
            .imports()
            .map_err(InspectError::Imports)?
            .into_iter()
            .map(|import| ImportedFunction {
                library: String::from_utf8_lossy(import.library()).into_owned(),
                name: String::from_utf8_lossy(import.name()).into_owned(),
            })
            .collect();

        // Skip the null symbol and anything without a readable name
        let imported_symbols = obj_file
            .symbols()
            .filter(ObjectSymbol::is_undefined)
            .filter_map(|sym| {
                let name = sym.name().ok().filter(|n| !n.is_empty())?;
                Some(ImportedSymbol {
                    name: name.to_string(),
                    kind: format!("{:?}", sym.kind()),
                    weak: sym.is_weak(),
                })
            })
            .collect();

        Ok(Self {
            format: format!("{:?}", obj_file.format()),
            architecture: format!("{:?}", obj_file.architecture()),
            imports,
            imported_symbols,
        })
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    #[must_use]
    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    /// Import table entries
    #[must_use]
    pub fn imports(&self) -> &[ImportedFunction] {
        &self.imports
    }

    /// Undefined symbols from the symbol table
    #[must_use]
    pub fn imported_symbols(&self) -> &[ImportedSymbol] {
        &self.imported_symbols
    }

    /// Empty the imported-function list, returning how many entries it had
    pub fn clear_imported_functions(&mut self) -> usize {
        let removed = self.imports.len();
        self.imports.clear();
        removed
    }
}
