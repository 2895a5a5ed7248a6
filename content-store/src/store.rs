use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, StoreError};

/// A record is an arbitrary JSON object. The store imposes no schema beyond
/// "array of objects per file"; the `id` field (and `createdAt` for
/// contacts) is the caller's concern.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// The named content collections, one JSON file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Events,
    Gallery,
    Services,
    Portfolio,
    Blogs,
    Contacts,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Events,
        Collection::Gallery,
        Collection::Services,
        Collection::Portfolio,
        Collection::Blogs,
        Collection::Contacts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Gallery => "gallery",
            Collection::Services => "services",
            Collection::Portfolio => "portfolio",
            Collection::Blogs => "blogs",
            Collection::Contacts => "contacts",
        }
    }

    fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat-file store: one JSON array per collection under a data directory.
///
/// `read` never fails: a missing, empty, or unparsable file yields an empty
/// list (logged, not raised). `write` replaces the whole file. There is no
/// locking: two concurrent writers to the same collection race and the last
/// write wins, which is the accepted limitation of this store.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }

    /// Load a collection from disk. Absent, empty, or corrupt files read as
    /// an empty list; the failure is logged and swallowed.
    pub fn read(&self, collection: Collection) -> Vec<Record> {
        let path = self.path(collection);
        if !path.exists() {
            return Vec::new();
        }
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(collection = %collection, error = %e, "failed reading collection file");
                return Vec::new();
            }
        };
        if raw.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(collection = %collection, error = %e, "failed parsing collection file");
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and replace its file. Written via a
    /// sibling temp file and rename so readers never observe a torn file;
    /// beyond that there is no durability guarantee.
    pub fn write(&self, collection: Collection, records: &[Record]) -> Result<()> {
        let io_err = |source| StoreError::Io { collection: collection.as_str(), source };

        fs::create_dir_all(&self.data_dir).map_err(io_err)?;

        let json = serde_json::to_string_pretty(records)
            .map_err(|source| StoreError::Serialize { collection: collection.as_str(), source })?;

        let path = self.path(collection);
        // Unique per write so concurrent writers never rename each other's
        // temp file out from under them.
        static TMP_SEQ: AtomicU64 = AtomicU64::new(0);
        let tmp = self.data_dir.join(format!(
            ".{}.{}.tmp",
            collection.file_name(),
            TMP_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, serde_json::Value)]) -> Record {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn read_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        assert!(store.read(Collection::Events).is_empty());
    }

    #[test]
    fn read_empty_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        std::fs::write(store.path(Collection::Blogs), "").unwrap();
        assert!(store.read(Collection::Blogs).is_empty());
    }

    #[test]
    fn read_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        std::fs::write(store.path(Collection::Gallery), "{not json").unwrap();
        assert!(store.read(Collection::Gallery).is_empty());
    }

    #[test]
    fn write_then_read_round_trips_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let records = vec![
            record(&[("id", json!("a")), ("title", json!("first"))]),
            record(&[("id", json!("b")), ("title", json!("second"))]),
        ];
        store.write(Collection::Services, &records).unwrap();
        assert_eq!(store.read(Collection::Services), records);
    }

    #[test]
    fn write_replaces_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store
            .write(Collection::Events, &[record(&[("id", json!("a"))])])
            .unwrap();
        store
            .write(Collection::Events, &[record(&[("id", json!("b"))])])
            .unwrap();
        let records = store.read(Collection::Events);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], json!("b"));
    }

    #[test]
    fn concurrent_writers_race_without_corruption() {
        // Last write wins: the losing writer's record may be silently
        // dropped, but the file always stays parsable.
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store.write(Collection::Events, &[]).unwrap();

        let a = record(&[("id", json!("writer-a"))]);
        let b = record(&[("id", json!("writer-b"))]);
        let (sa, sb) = (store.clone(), store.clone());
        let (ra, rb) = (a.clone(), b.clone());
        let ta = std::thread::spawn(move || {
            let mut list = sa.read(Collection::Events);
            list.push(ra);
            sa.write(Collection::Events, &list).unwrap();
        });
        let tb = std::thread::spawn(move || {
            let mut list = sb.read(Collection::Events);
            list.push(rb);
            sb.write(Collection::Events, &list).unwrap();
        });
        ta.join().unwrap();
        tb.join().unwrap();

        let survivors = store.read(Collection::Events);
        // Either both interleaved cleanly or one update was lost; never
        // zero, never garbage.
        assert!(!survivors.is_empty() && survivors.len() <= 2);
        for r in &survivors {
            assert!(r == &a || r == &b);
        }
    }
}
