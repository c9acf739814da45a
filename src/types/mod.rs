//! Core data types: result rows and snapshot identifiers.

mod driver_result;
mod snapshot_id;

pub use driver_result::{DriverResult, COLUMNS};
pub use snapshot_id::{SnapshotId, SnapshotIdError};
