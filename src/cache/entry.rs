//! Cache Entry Module
//!
//! Defines a single cached value together with the instant it was written.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value and its write timestamp.
///
/// Entries are replaced wholesale on every write and never updated in place.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was written
    pub written_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with the given write instant.
    pub fn new(value: V, written_at: Instant) -> Self {
        Self { value, written_at }
    }

    // == Is Fresh ==
    /// Checks whether the entry is still valid at `now` for a freshness window
    /// of `duration`.
    ///
    /// Boundary condition: the entry is fresh while `now - written_at < duration`
    /// and stale from `written_at + duration` onward. A `now` earlier than the
    /// write instant counts as zero elapsed time.
    pub fn is_fresh_at(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.written_at) < duration
    }
}
