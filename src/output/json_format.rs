//! JSON output formatting.

use crate::store::ResultsStore;
use std::io::{self, Write};

/// Write the store state as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, store: &ResultsStore) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, store.state()).map_err(io::Error::other)?;
    writeln!(out)
}
