//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use crate::cache::clock::duration_to_ms;

// == Cache Entry ==
/// A stored value plus its creation and expiry timestamps.
///
/// Entries are never mutated after insertion; overwriting a key replaces the
/// whole entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry created at `now_ms` that lives for `ttl`.
    ///
    /// A zero TTL produces an entry that is already expired.
    pub fn new(value: V, now_ms: u64, ttl: Duration) -> Self {
        Self {
            value,
            created_at: now_ms,
            expires_at: now_ms.saturating_add(duration_to_ms(ttl)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// An entry is live only while `now_ms < expires_at`.
    pub fn is_expired_at(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds at `now_ms`, or 0 once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64) -> u64 {
        self.expires_at.saturating_sub(now_ms)
    }

    /// Total lifetime the entry was created with.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.expires_at - self.created_at)
    }
}
