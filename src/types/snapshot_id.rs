//! Identifiers for persisted store snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a saved snapshot (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(Uuid);

impl SnapshotId {
    /// Length of the hyphenated string form.
    pub const LEN: usize = 36;

    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First 8 characters, enough to address a snapshot in practice.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }

    /// Whether the hyphenated form of this ID starts with `prefix`.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        self.0.to_string().starts_with(&prefix.to_ascii_lowercase())
    }
}

impl Default for SnapshotId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SnapshotId {
    type Err = SnapshotIdError;

    /// Accepts any full UUID form (hyphenated, simple, braced, urn).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Uuid::parse_str(s) {
            Ok(uuid) => Ok(Self(uuid)),
            Err(_) if s.len() < Self::LEN => Err(SnapshotIdError::ShortForm(s.to_string())),
            Err(_) => Err(SnapshotIdError::InvalidFormat(s.to_string())),
        }
    }
}

/// Error type for SnapshotId parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotIdError {
    #[error("invalid snapshot ID format: {0}")]
    InvalidFormat(String),
    #[error("'{0}' is a short ID; resolve it against the snapshot store")]
    ShortForm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_id_generation() {
        assert_ne!(SnapshotId::new(), SnapshotId::new());
    }

    #[test]
    fn test_snapshot_id_display() {
        assert_eq!(SnapshotId::new().to_string().len(), SnapshotId::LEN);
    }

    #[test]
    fn test_snapshot_id_parse() {
        let id = SnapshotId::new();
        let parsed: SnapshotId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_simple_form_parses_to_same_id() {
        let id = SnapshotId::new();
        let simple = id.to_string().replace('-', "");
        assert_eq!(simple.len(), 32);
        assert_eq!(simple.parse::<SnapshotId>().unwrap(), id);
        assert_eq!(simple.to_uppercase().parse::<SnapshotId>().unwrap(), id);
    }

    #[test]
    fn test_short_form_is_not_parsed() {
        let id = SnapshotId::new();
        let err = id.short().parse::<SnapshotId>().unwrap_err();
        assert!(matches!(err, SnapshotIdError::ShortForm(_)));
    }

    #[test]
    fn test_matches_prefix() {
        let id = SnapshotId::new();
        assert!(id.matches_prefix(&id.short()));
        assert!(id.matches_prefix(&id.short().to_uppercase()));
        assert!(id.matches_prefix(""));
    }
}
