//! Plain data held by the store.

use crate::types::DriverResult;
use serde::{Deserialize, Serialize};

/// The results table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Results {
    /// Rows in table order.
    pub data: Vec<DriverResult>,
}

/// Full store state: `{ "results": { "data": [...] }, "fetching": bool }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    pub results: Results,
    /// Set while an external retrieval is in progress.
    pub fetching: bool,
}
