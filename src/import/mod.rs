//! Loading results tables from local files into a store.
//!
//! Import sits outside the store: it parses rows and hands them over
//! through the store's actions, raising `fetching` while it works.

mod csv_table;
mod json_table;

pub use csv_table::parse_csv;
pub use json_table::parse_json;

use crate::error::{ImportError, ImportResult};
use crate::store::{Extend, ReplaceAll, ResultsStore, SetFetching};
use crate::types::DriverResult;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Supported table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    /// Guess the format from a file extension.
    pub fn detect(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// What to do with rows already in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Drop existing rows first.
    #[default]
    Replace,
    /// Keep existing rows and add the new ones after them.
    Append,
}

/// Read all rows from `path`. The format is detected from the extension
/// when not given.
pub fn read_rows(path: &Path, format: Option<ImportFormat>) -> ImportResult<Vec<DriverResult>> {
    let format = format
        .or_else(|| ImportFormat::detect(path))
        .ok_or_else(|| ImportError::UnknownFormat(path.to_path_buf()))?;

    debug!(path = %path.display(), %format, "reading results table");

    let read_err = |source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    };

    match format {
        ImportFormat::Csv => parse_csv(File::open(path).map_err(read_err)?),
        ImportFormat::Json => parse_json(&std::fs::read_to_string(path).map_err(read_err)?),
    }
}

/// Import `path` into `store`. Returns the number of rows read.
///
/// `fetching` is true while the file is read and false afterwards, whether
/// or not the import succeeded. On failure the table is left untouched.
pub fn import_file(
    store: &mut ResultsStore,
    path: &Path,
    format: Option<ImportFormat>,
    mode: ImportMode,
) -> ImportResult<usize> {
    store.dispatch(SetFetching(true));

    let outcome = read_rows(path, format).map(|rows| {
        let count = rows.len();
        match mode {
            ImportMode::Replace => {
                store.dispatch(ReplaceAll(rows));
            }
            ImportMode::Append => {
                store.dispatch(Extend(rows));
            }
        }
        count
    });

    store.dispatch(SetFetching(false));

    if let Ok(count) = outcome {
        info!(path = %path.display(), rows = count, ?mode, "imported results");
    }
    outcome
}
