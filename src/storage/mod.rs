//! Snapshot persistence.
//!
//! Provides JSON-based storage for copies of the store state.

mod json_store;

pub use json_store::{Snapshot, SnapshotStore, StorageStats};
