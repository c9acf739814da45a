//! CSV results tables.

use crate::error::{ImportError, ImportResult};
use crate::types::{DriverResult, COLUMNS};
use std::io::Read;

/// Parse a CSV table with a header row.
///
/// Columns are matched by exact header name and may appear in any order;
/// unknown columns are ignored. Cell values are kept verbatim.
pub fn parse_csv<R: Read>(reader: R) -> ImportResult<Vec<DriverResult>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| csv_error(0, e))?.clone();

    let mut positions = [0usize; 10];
    for (slot, column) in positions.iter_mut().zip(COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ImportError::MissingColumn(column.to_string()))?;
    }

    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let number = idx as u64 + 1;
        let record = record.map_err(|e| csv_error(number, e))?;
        let cells = positions.map(|pos| record.get(pos).unwrap_or_default().to_string());
        rows.push(DriverResult::from_cells(cells));
    }

    Ok(rows)
}

fn csv_error(record: u64, e: csv::Error) -> ImportError {
    ImportError::Csv {
        record,
        reason: e.to_string(),
    }
}
