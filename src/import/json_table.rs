//! JSON results tables.

use crate::error::ImportResult;
use crate::store::Results;
use crate::types::DriverResult;
use serde::Deserialize;
use serde_json::Value;

/// A state document as read from disk; anything besides `results` is ignored.
#[derive(Deserialize)]
struct StateDocument {
    results: Results,
}

/// Parse either a bare array of rows or a state document
/// (`{ "results": { "data": [...] }, "fetching": ... }`).
///
/// The `fetching` key of a state document is optional and not carried over.
pub fn parse_json(input: &str) -> ImportResult<Vec<DriverResult>> {
    let value: Value = serde_json::from_str(input)?;

    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }

    let document: StateDocument = serde_json::from_value(value)?;
    Ok(document.results.data)
}
