//! Cache Module
//!
//! Provides in-memory storage with lazy, read-time expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ExpiringCache;

// == Public Constants ==
/// Default freshness window: 15 minutes
pub const DEFAULT_CACHE_TTL_SECS: u64 = 15 * 60;
