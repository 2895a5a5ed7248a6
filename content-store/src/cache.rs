use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use crate::clock::Clock;
use crate::error::Result;
use crate::store::{Collection, JsonStore, Record};

/// Default freshness window for cached collection reads.
pub const DEFAULT_FRESHNESS_WINDOW_SECS: i64 = 5 * 60;

struct CacheEntry {
    records: Vec<Record>,
    loaded_at: DateTime<Utc>,
}

/// Read cache in front of [`JsonStore`].
///
/// A read within the freshness window of the last disk load returns the
/// cached value without touching disk; outside the window it reloads and
/// resets the window. Entries are never evicted proactively.
///
/// Writes persist through to disk and mirror the written value into the
/// cache entry without resetting `loaded_at`, so a process's own writes are
/// immediately visible to its own reads while out-of-band disk changes stay
/// invisible until the window lapses.
pub struct CachedStore {
    store: JsonStore,
    clock: Arc<dyn Clock>,
    window: Duration,
    entries: Mutex<HashMap<Collection, CacheEntry>>,
}

impl CachedStore {
    pub fn new(store: JsonStore, clock: Arc<dyn Clock>) -> Self {
        Self::with_window(store, clock, Duration::seconds(DEFAULT_FRESHNESS_WINDOW_SECS))
    }

    pub fn with_window(store: JsonStore, clock: Arc<dyn Clock>, window: Duration) -> Self {
        Self {
            store,
            clock,
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Read a collection, serving from cache while the entry is fresh.
    pub fn read(&self, collection: Collection) -> Vec<Record> {
        let now = self.clock.now();
        let mut entries = self.entries.lock();
        if let Some(entry) = entries.get(&collection) {
            if now - entry.loaded_at < self.window {
                return entry.records.clone();
            }
        }
        let records = self.store.read(collection);
        entries.insert(
            collection,
            CacheEntry { records: records.clone(), loaded_at: now },
        );
        records
    }

    /// Persist a full collection and mirror it into the cache. The entry's
    /// `loaded_at` is left alone: the freshness window still dates from the
    /// last disk load.
    pub fn write(&self, collection: Collection, records: &[Record]) -> Result<()> {
        self.store.write(collection, records)?;
        let mut entries = self.entries.lock();
        match entries.get_mut(&collection) {
            Some(entry) => entry.records = records.to_vec(),
            None => {
                entries.insert(
                    collection,
                    CacheEntry { records: records.to_vec(), loaded_at: self.clock.now() },
                );
            }
        }
        Ok(())
    }
}
