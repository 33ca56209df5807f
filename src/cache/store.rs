//! Report Cache Module
//!
//! Time-bounded store of upstream reports keyed by (type, time).
//!
//! Entries are never evicted or deleted. An expired entry simply stops being
//! served and is replaced by the next successful fetch for its key, so the
//! map grows by one entry per distinct key ever requested.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::cache::{CacheEntry, CacheStats, Clock, ReportKey};
use crate::models::Report;

// == Report Cache ==
/// Report storage with time-based validity.
pub struct ReportCache {
    /// Key-report storage
    entries: HashMap<ReportKey, CacheEntry>,
    /// Lookup statistics
    stats: CacheStats,
    /// Time source used for every validity check
    clock: Arc<dyn Clock>,
}

impl ReportCache {
    // == Constructor ==
    /// Creates an empty cache reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            clock,
        }
    }

    /// Current time according to the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // == Has ==
    /// Returns true if `key` has an entry whose expiry is strictly in the future.
    pub fn has(&self, key: &ReportKey) -> bool {
        let now = self.clock.now();
        self.entries
            .get(key)
            .is_some_and(|entry| entry.is_valid_at(now))
    }

    // == Get ==
    /// Retrieves the cached report for `key`.
    ///
    /// Returns `None` when there is no entry or the entry has expired; an
    /// expired payload is never served.
    pub fn get(&mut self, key: &ReportKey) -> Option<Arc<Report>> {
        if !self.has(key) {
            self.stats.record_miss();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| Arc::clone(&entry.payload))
    }

    // == Put ==
    /// Stores `payload` under `key` for `ttl`, replacing any previous entry.
    pub fn put(&mut self, key: ReportKey, payload: Arc<Report>, ttl: Duration) {
        let now = self.clock.now();
        self.insert(key, CacheEntry::new(payload, now, ttl));
    }

    /// Stores `payload` under `key` until `expires_at`, replacing any previous entry.
    pub fn put_until(&mut self, key: ReportKey, payload: Arc<Report>, expires_at: DateTime<Utc>) {
        let now = self.clock.now();
        self.insert(key, CacheEntry::until(payload, now, expires_at));
    }

    fn insert(&mut self, key: ReportKey, entry: CacheEntry) {
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ReportCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportCache")
            .field("entries", &self.entries.len())
            .field("stats", &self.stats)
            .finish()
    }
}
