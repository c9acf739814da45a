//! JSON-based snapshot storage.
//!
//! Stores each snapshot as a separate JSON file named after its ID.
//! Supports listing, prefix lookup, deletion and age-based cleanup.

use crate::error::{StorageError, StorageResult};
use crate::store::{ReplaceAll, Results, ResultsStore};
use crate::types::SnapshotId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A persisted copy of a store's results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Unique identifier for this snapshot.
    pub id: SnapshotId,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// Where the rows came from, usually the imported file.
    pub source: String,
    /// Number of rows, kept alongside the data for quick listings.
    pub row_count: usize,
    /// The table itself.
    pub results: Results,
}

impl Snapshot {
    /// Capture the current table of `store`.
    pub fn capture(store: &ResultsStore, source: impl Into<String>) -> Self {
        Self {
            id: SnapshotId::new(),
            saved_at: Utc::now(),
            source: source.into(),
            row_count: store.len(),
            results: store.results().clone(),
        }
    }

    /// Load this snapshot's rows into `store`, replacing what is there.
    pub fn restore_into(&self, store: &mut ResultsStore) {
        store.dispatch(ReplaceAll(self.results.data.clone()));
    }

    /// One-line description used in listings.
    pub fn summary(&self) -> String {
        format!(
            "{} rows from {} [{}]",
            self.row_count,
            self.source,
            self.saved_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// JSON file-based snapshot storage.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Open (and create if needed) a snapshot directory.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::DirectoryError(e.to_string()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save a snapshot, overwriting any file with the same ID.
    pub fn save(&self, snapshot: &Snapshot) -> StorageResult<()> {
        let file = self.snapshot_file(&snapshot.id);
        let content = serde_json::to_string_pretty(snapshot)?;

        fs::write(&file, content).map_err(|e| StorageError::SaveFailed(e.to_string()))?;
        info!(id = %snapshot.id, rows = snapshot.row_count, "saved snapshot");
        Ok(())
    }

    /// Load a snapshot by ID.
    pub fn load(&self, id: &SnapshotId) -> StorageResult<Snapshot> {
        let file = self.snapshot_file(id);

        if !file.exists() {
            return Err(StorageError::SnapshotNotFound(id.to_string()));
        }

        let content =
            fs::read_to_string(&file).map_err(|e| StorageError::LoadFailed(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| StorageError::LoadFailed(e.to_string()))
    }

    /// Find a snapshot by a unique ID prefix.
    pub fn find_by_prefix(&self, prefix: &str) -> StorageResult<Snapshot> {
        let matches: Vec<_> = self
            .list_ids()?
            .into_iter()
            .filter(|id| id.matches_prefix(prefix))
            .collect();

        match matches.as_slice() {
            [] => Err(StorageError::SnapshotNotFound(prefix.to_string())),
            [id] => self.load(id),
            _ => Err(StorageError::Ambiguous {
                prefix: prefix.to_string(),
                matches: matches.len(),
            }),
        }
    }

    /// Load by full ID when one is given, otherwise by prefix.
    pub fn resolve(&self, id_or_prefix: &str) -> StorageResult<Snapshot> {
        match id_or_prefix.parse::<SnapshotId>() {
            Ok(id) => self.load(&id),
            Err(_) => self.find_by_prefix(id_or_prefix),
        }
    }

    /// List all snapshot IDs found on disk, in no particular order.
    pub fn list_ids(&self) -> StorageResult<Vec<SnapshotId>> {
        let mut ids = Vec::new();

        for entry in
            fs::read_dir(&self.dir).map_err(|e| StorageError::DirectoryError(e.to_string()))?
        {
            let entry = entry.map_err(|e| StorageError::DirectoryError(e.to_string()))?;
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem() {
                    if let Ok(id) = stem.to_string_lossy().parse::<SnapshotId>() {
                        ids.push(id);
                    }
                }
            }
        }

        Ok(ids)
    }

    /// List all readable snapshots, most recent first.
    pub fn list(&self) -> StorageResult<Vec<Snapshot>> {
        let mut snapshots = Vec::new();

        for id in self.list_ids()? {
            match self.load(&id) {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(e) => warn!(%id, error = %e, "skipping unreadable snapshot"),
            }
        }

        snapshots.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));

        Ok(snapshots)
    }

    /// List the `count` most recent snapshots.
    pub fn list_recent(&self, count: usize) -> StorageResult<Vec<Snapshot>> {
        let mut snapshots = self.list()?;
        snapshots.truncate(count);
        Ok(snapshots)
    }

    /// Delete a snapshot.
    pub fn delete(&self, id: &SnapshotId) -> StorageResult<()> {
        let file = self.snapshot_file(id);

        if !file.exists() {
            return Err(StorageError::SnapshotNotFound(id.to_string()));
        }

        fs::remove_file(&file).map_err(|e| StorageError::SaveFailed(e.to_string()))?;
        info!(%id, "deleted snapshot");
        Ok(())
    }

    /// Delete every snapshot. Returns how many were removed.
    pub fn clear(&self) -> StorageResult<usize> {
        let ids = self.list_ids()?;
        for id in &ids {
            self.delete(id)?;
        }
        Ok(ids.len())
    }

    /// Delete snapshots older than `max_age`. Returns how many were removed.
    pub fn cleanup(&self, max_age: chrono::Duration) -> StorageResult<usize> {
        let cutoff = Utc::now() - max_age;
        let mut deleted = 0;

        for snapshot in self.list()? {
            if snapshot.saved_at < cutoff {
                self.delete(&snapshot.id)?;
                deleted += 1;
            }
        }

        Ok(deleted)
    }

    /// Get storage statistics.
    pub fn stats(&self) -> StorageResult<StorageStats> {
        let snapshots = self.list()?;
        let total_size_bytes = snapshots
            .iter()
            .filter_map(|s| fs::metadata(self.snapshot_file(&s.id)).ok())
            .map(|m| m.len())
            .sum();

        Ok(StorageStats {
            snapshot_count: snapshots.len(),
            total_rows: snapshots.iter().map(|s| s.row_count).sum(),
            total_size_bytes,
            oldest: snapshots.last().map(|s| s.saved_at),
            newest: snapshots.first().map(|s| s.saved_at),
        })
    }

    fn snapshot_file(&self, id: &SnapshotId) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

/// Storage statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageStats {
    pub snapshot_count: usize,
    /// Rows across all snapshots.
    pub total_rows: usize,
    pub total_size_bytes: u64,
    pub oldest: Option<DateTime<Utc>>,
    pub newest: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Extend;
    use crate::types::DriverResult;
    use tempfile::TempDir;

    fn populated_store() -> ResultsStore {
        let mut store = ResultsStore::new();
        store.dispatch(Extend(vec![
            DriverResult::new("1", "A. Driver").with_number("5"),
            DriverResult::new("2", "B. Driver").with_number("12"),
        ]));
        store
    }

    fn open_temp() -> (TempDir, SnapshotStore) {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::open(dir.path().join("snapshots")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_capture_copies_rows() {
        let snapshot = Snapshot::capture(&populated_store(), "race.csv");
        assert_eq!(snapshot.row_count, 2);
        assert_eq!(snapshot.results.data[1].driver, "B. Driver");
        assert!(snapshot.summary().starts_with("2 rows from race.csv"));
    }

    #[test]
    fn test_save_and_load() {
        let (_dir, snapshots) = open_temp();
        let snapshot = Snapshot::capture(&populated_store(), "race.csv");

        snapshots.save(&snapshot).unwrap();
        assert_eq!(snapshots.load(&snapshot.id).unwrap(), snapshot);
    }

    #[test]
    fn test_restore_replaces_rows() {
        let snapshot = Snapshot::capture(&populated_store(), "race.csv");

        let mut store = ResultsStore::new();
        store.dispatch(Extend(vec![DriverResult::new("1", "Other")]));
        snapshot.restore_into(&mut store);

        assert_eq!(store.data(), snapshot.results.data.as_slice());
    }

    #[test]
    fn test_find_by_prefix_and_resolve() {
        let (_dir, snapshots) = open_temp();
        let snapshot = Snapshot::capture(&populated_store(), "race.csv");
        snapshots.save(&snapshot).unwrap();

        let found = snapshots.find_by_prefix(&snapshot.id.short()).unwrap();
        assert_eq!(found.id, snapshot.id);
        assert_eq!(snapshots.resolve(&snapshot.id.to_string()).unwrap().id, snapshot.id);
        assert_eq!(snapshots.resolve(&snapshot.id.short()).unwrap().id, snapshot.id);

        let simple = snapshot.id.to_string().replace('-', "");
        assert_eq!(snapshots.resolve(&simple).unwrap().id, snapshot.id);
    }

    #[test]
    fn test_ambiguous_and_missing_prefix() {
        let (_dir, snapshots) = open_temp();
        snapshots.save(&Snapshot::capture(&populated_store(), "a")).unwrap();
        snapshots.save(&Snapshot::capture(&populated_store(), "b")).unwrap();

        assert!(matches!(
            snapshots.find_by_prefix(""),
            Err(StorageError::Ambiguous { matches: 2, .. })
        ));
        assert!(matches!(
            snapshots.find_by_prefix("zzzz"),
            Err(StorageError::SnapshotNotFound(_))
        ));
    }

    #[test]
    fn test_list_is_newest_first_and_skips_garbage() {
        let (_dir, snapshots) = open_temp();

        let mut older = Snapshot::capture(&populated_store(), "older");
        older.saved_at = Utc::now() - chrono::Duration::hours(1);
        let newer = Snapshot::capture(&populated_store(), "newer");
        snapshots.save(&older).unwrap();
        snapshots.save(&newer).unwrap();

        fs::write(snapshots.dir().join("notes.txt"), "x").unwrap();
        fs::write(
            snapshots.dir().join(format!("{}.json", SnapshotId::new())),
            "{ broken",
        )
        .unwrap();

        let listed = snapshots.list().unwrap();
        let sources: Vec<_> = listed.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(sources, vec!["newer", "older"]);
        assert_eq!(snapshots.list_recent(1).unwrap()[0].source, "newer");
    }

    #[test]
    fn test_delete_and_clear() {
        let (_dir, snapshots) = open_temp();
        let first = Snapshot::capture(&populated_store(), "a");
        snapshots.save(&first).unwrap();
        snapshots.save(&Snapshot::capture(&populated_store(), "b")).unwrap();

        snapshots.delete(&first.id).unwrap();
        assert!(matches!(
            snapshots.delete(&first.id),
            Err(StorageError::SnapshotNotFound(_))
        ));
        assert_eq!(snapshots.clear().unwrap(), 1);
        assert!(snapshots.list_ids().unwrap().is_empty());
    }

    #[test]
    fn test_cleanup_removes_old_snapshots() {
        let (_dir, snapshots) = open_temp();
        let mut old = Snapshot::capture(&populated_store(), "old");
        old.saved_at = Utc::now() - chrono::Duration::days(10);
        snapshots.save(&old).unwrap();
        snapshots.save(&Snapshot::capture(&populated_store(), "fresh")).unwrap();

        assert_eq!(snapshots.cleanup(chrono::Duration::days(7)).unwrap(), 1);
        assert_eq!(snapshots.list().unwrap()[0].source, "fresh");
    }

    #[test]
    fn test_stats() {
        let (_dir, snapshots) = open_temp();
        assert_eq!(snapshots.stats().unwrap().snapshot_count, 0);

        snapshots.save(&Snapshot::capture(&populated_store(), "a")).unwrap();
        let stats = snapshots.stats().unwrap();
        assert_eq!(stats.snapshot_count, 1);
        assert_eq!(stats.total_rows, 2);
        assert!(stats.total_size_bytes > 0);
        assert_eq!(stats.oldest, stats.newest);
    }
}
