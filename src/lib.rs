//! # racetable - race results tables as data
//!
//! racetable keeps a race classification table (one text row per driver)
//! in a small, explicit state container and surrounds it with the usual
//! tooling: file import, snapshot history and export.
//!
//! ## Example Usage
//!
//! ```rust
//! use racetable::store::{Append, ResultsStore};
//! use racetable::types::DriverResult;
//!
//! let mut store = ResultsStore::new();
//! assert!(store.data().is_empty());
//! assert!(!store.is_fetching());
//!
//! let row = DriverResult::new("1", "A. Driver")
//!     .with_number("5")
//!     .with_car("X1", "V8")
//!     .with_timing("70", "1:45:10", "-", "185.2");
//! store.dispatch(Append(row.clone()));
//!
//! assert_eq!(store.data(), &[row]);
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Result rows and snapshot identifiers
//! - [`store`] - The results store, its actions and getters
//! - [`import`] - Reading CSV and JSON tables into a store
//! - [`storage`] - Snapshot persistence
//! - [`config`] - Paths and application settings
//! - [`output`] - Plain, JSON and CSV rendering
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod output;
pub mod storage;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ImportError, StorageError};
pub use store::{Action, Getter, ResultsStore, StoreState};
pub use types::{DriverResult, SnapshotId};
