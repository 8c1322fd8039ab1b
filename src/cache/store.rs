//! Expiring Cache Module
//!
//! HashMap storage where each entry is valid for a fixed window after it was
//! written. Expiry is evaluated lazily on read; there is no background sweep,
//! so keys that are never read again stay in the map.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats};

// == Expiring Cache ==
/// Key-value store with a single fixed freshness window.
#[derive(Debug)]
pub struct ExpiringCache<V> {
    /// Key-value storage; a present key may still be stale
    entries: HashMap<String, CacheEntry<V>>,
    /// Freshness window, fixed at construction
    duration: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl<V: Clone> ExpiringCache<V> {
    // == Constructor ==
    /// Creates an empty cache whose entries stay fresh for `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            duration,
            stats: CacheStats::new(),
        }
    }

    // == Get ==
    /// Returns the value for `key` if it was written less than `duration` ago.
    ///
    /// A stale entry is removed as a side effect.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Same as [`get`](Self::get), evaluated at an explicit instant.
    pub fn get_at(&mut self, key: &str, now: Instant) -> Option<V> {
        let fresh = match self.entries.get(key) {
            Some(entry) => entry.is_fresh_at(now, self.duration),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if !fresh {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any prior entry and restarting its
    /// freshness window.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.set_at(key, value, Instant::now());
    }

    /// Same as [`set`](Self::set), stamped with an explicit instant.
    pub fn set_at(&mut self, key: impl Into<String>, value: V, now: Instant) {
        self.entries.insert(key.into(), CacheEntry::new(value, now));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the freshness window.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the number of entries held, including stale ones not yet read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no entries, stale or fresh.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `key` is in the map, regardless of freshness.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}
