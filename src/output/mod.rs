//! Output formatting module.
//!
//! Renders a store's results table as plain text, JSON, or CSV.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::write_csv;
pub use json_format::write_json;
pub use plain::{print_info, print_success, print_warning, write_plain};

use crate::cli::OutputFormat;
use crate::store::ResultsStore;
use std::io::{self, Write};

/// Render `store` into `out` in the given format.
///
/// `max_cell_width` only affects plain output.
pub fn write_results<W: Write>(
    out: &mut W,
    store: &ResultsStore,
    format: OutputFormat,
    max_cell_width: usize,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::write_plain(out, store, max_cell_width),
        OutputFormat::Json => json_format::write_json(out, store),
        OutputFormat::Csv => csv_format::write_csv(out, store),
    }
}

/// Render `store` to a string.
pub fn render_results(
    store: &ResultsStore,
    format: OutputFormat,
    max_cell_width: usize,
) -> io::Result<String> {
    let mut buf = Vec::new();
    write_results(&mut buf, store, format, max_cell_width)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Print `store` to stdout.
pub fn print_results(
    store: &ResultsStore,
    format: OutputFormat,
    max_cell_width: usize,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, store, format, max_cell_width)?;
    out.flush()
}
