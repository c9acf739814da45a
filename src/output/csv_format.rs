//! CSV output formatting.

use crate::store::ResultsStore;
use crate::types::COLUMNS;
use std::io::{self, Write};

/// Write the table as CSV with a header row of column names.
pub fn write_csv<W: Write>(out: &mut W, store: &ResultsStore) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(COLUMNS)?;
    for row in store.data() {
        wtr.write_record(row.cells())?;
    }

    wtr.flush()?;
    Ok(())
}
