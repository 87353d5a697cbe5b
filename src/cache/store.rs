//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with FIFO eviction and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, InsertionOrder, SystemClock};

/// A stored entry plus the sequence number of its slot in the insertion order.
#[derive(Debug)]
struct Slot<V> {
    seq: u64,
    entry: CacheEntry<V>,
}

fn live_in<V>(entries: &HashMap<String, Slot<V>>) -> impl Fn(&str, u64) -> bool + '_ {
    move |key: &str, seq: u64| entries.get(key).is_some_and(|slot| slot.seq == seq)
}

// == TTL Cache ==
/// A size- and time-bounded key/value store.
///
/// - At most `max_size` entries are held; inserting a new key into a full
///   cache evicts the oldest insertion first.
/// - Expired entries are never returned. They are dropped on the first read
///   after expiry or by [`TtlCache::sweep_expired`].
///
/// The store is plain single-owner state. Share it behind a lock when several
/// tasks need it.
#[derive(Debug)]
pub struct TtlCache<V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, Slot<V>>,
    /// FIFO eviction order
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_size: usize,
    /// TTL applied when `set` is called without one
    default_ttl: Duration,
    clock: C,
}

impl<V: Clone> TtlCache<V, SystemClock> {
    // == Constructor ==
    /// Creates a cache backed by the system clock.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries (0 is treated as 1)
    /// * `default_ttl` - TTL for entries stored without an explicit one
    pub fn new(max_size: usize, default_ttl: Duration) -> Self {
        Self::with_clock(max_size, default_ttl, SystemClock)
    }
}

impl<V: Clone, C: Clock> TtlCache<V, C> {
    /// Creates a cache reading time from `clock`.
    pub fn with_clock(max_size: usize, default_ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            max_size: max_size.max(1),
            default_ttl,
            clock,
        }
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl` (or the default TTL).
    ///
    /// Overwriting an existing key replaces its entry in place: nothing is
    /// evicted and the key keeps its original position in the eviction order.
    /// Inserting a new key into a full cache evicts the oldest insertion,
    /// whose key is returned.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: V,
        ttl: Option<Duration>,
    ) -> Option<String> {
        let key = key.into();
        let now = self.clock.now_ms();
        let entry = CacheEntry::new(value, now, ttl.unwrap_or(self.default_ttl));

        if let Some(slot) = self.entries.get_mut(&key) {
            slot.entry = entry;
            return None;
        }

        let mut evicted = None;
        if self.entries.len() >= self.max_size {
            let entries = &self.entries;
            if let Some(oldest) = self.order.pop_oldest(live_in(entries)) {
                self.entries.remove(&oldest);
                self.stats.record_eviction();
                debug!(key = %oldest, "Evicted oldest cache entry");
                evicted = Some(oldest);
            }
        }

        let seq = self.order.push(&key);
        self.entries.insert(key, Slot { seq, entry });

        self.stats.set_total_entries(self.entries.len());
        evicted
    }

    // == Get ==
    /// Returns the value for `key` if it is present and not expired.
    ///
    /// A stale entry is removed as a side effect and counted as a miss.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        match self.entries.get(key) {
            Some(slot) if !slot.entry.is_expired_at(now) => {
                let value = slot.entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.remove_entry(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Contains ==
    /// Checks whether `key` holds a live entry, without touching statistics.
    pub fn contains(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.entries
            .get(key)
            .is_some_and(|slot| !slot.entry.is_expired_at(now))
    }

    // == Invalidate ==
    /// Removes `key` unconditionally.
    ///
    /// Returns whether an entry was removed; absent keys are a no-op.
    pub fn invalidate(&mut self, key: &str) -> bool {
        self.remove_entry(key)
    }

    // == Sweep Expired ==
    /// Removes every expired entry and returns how many were removed.
    pub fn sweep_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, slot)| slot.entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove_entry(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys.len()
    }

    // == Clear ==
    /// Drops all entries. Statistics counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the current number of entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Number of slots in the eviction queue, stale ones included.
    #[cfg(test)]
    pub(crate) fn queued_len(&self) -> usize {
        self.order.len()
    }

    /// Removes `key` from the map only; its queue slot goes stale.
    ///
    /// Stale slots are dropped when the queue grows past twice the capacity,
    /// which keeps removal O(1) amortised.
    fn remove_entry(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            if self.order.len() > self.max_size.saturating_mul(2) {
                self.order.compact(live_in(&self.entries));
            }
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }
}
