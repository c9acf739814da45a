//! Error types for racetable.
//!
//! Uses `thiserror` for ergonomic error definitions. The store itself never
//! fails; these cover configuration, import, snapshot storage and the CLI.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::SnapshotIdError;

/// Errors while resolving paths or reading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a home directory for configuration")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings file: {0}")]
    InvalidFormat(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors while reading a results table from a file.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot tell the format of {0}; pass --format csv or --format json")]
    UnknownFormat(PathBuf),

    #[error("CSV header is missing column '{0}'")]
    MissingColumn(String),

    #[error("CSV record {record}: {reason}")]
    Csv { record: u64, reason: String },

    #[error("invalid JSON results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the snapshot store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("snapshot not found: {0}")]
    SnapshotNotFound(String),

    #[error("ambiguous snapshot prefix '{prefix}': {matches} matches")]
    Ambiguous { prefix: String, matches: usize },

    #[error("failed to access snapshot directory: {0}")]
    DirectoryError(String),

    #[error("failed to save snapshot: {0}")]
    SaveFailed(String),

    #[error("failed to load snapshot: {0}")]
    LoadFailed(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level error for CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    SnapshotId(#[from] SnapshotIdError),

    #[error("output error: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ImportResult<T> = Result<T, ImportError>;
pub type StorageResult<T> = Result<T, StorageError>;
pub type CliResult<T> = Result<T, CliError>;
