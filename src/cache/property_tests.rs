//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache invariants against a manually driven clock.

use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use crate::cache::{ManualClock, TtlCache};

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;
const TEST_DEFAULT_TTL: Duration = Duration::from_secs(300);

fn manual_store(max_size: usize) -> (TtlCache<String, ManualClock>, ManualClock) {
    let clock = ManualClock::new(1_000_000);
    (
        TtlCache::with_clock(max_size, TEST_DEFAULT_TTL, clock.clone()),
        clock,
    )
}

// == Strategies ==
/// Generates cache keys shaped like the calculation keys used in practice
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}"
}

fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,256}"
}

/// Positive TTLs in milliseconds
fn ttl_ms_strategy() -> impl Strategy<Value = u64> {
    1u64..100_000
}

/// Distinct keys, in generation order
fn distinct_keys(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(valid_key_strategy(), min..max).prop_map(|keys| {
        let mut seen = HashSet::new();
        keys.into_iter().filter(|k| seen.insert(k.clone())).collect()
    })
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Invalidate { key: String },
    Advance { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (valid_key_strategy(), valid_value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        valid_key_strategy().prop_map(|key| CacheOp::Get { key }),
        valid_key_strategy().prop_map(|key| CacheOp::Invalidate { key }),
        (0u64..400_000).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Write-then-read: a fresh entry with a positive TTL is readable immediately.
    #[test]
    fn prop_write_then_read(
        key in valid_key_strategy(),
        value in valid_value_strategy(),
        ttl_ms in ttl_ms_strategy()
    ) {
        let (mut store, _) = manual_store(TEST_MAX_ENTRIES);

        store.set(key.clone(), value.clone(), Some(Duration::from_millis(ttl_ms)));

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // Expiry: once ttl + 1 ms has elapsed the entry is gone.
    #[test]
    fn prop_expiry(
        key in valid_key_strategy(),
        value in valid_value_strategy(),
        ttl_ms in ttl_ms_strategy()
    ) {
        let (mut store, clock) = manual_store(TEST_MAX_ENTRIES);

        store.set(key.clone(), value, Some(Duration::from_millis(ttl_ms)));
        clock.advance(Duration::from_millis(ttl_ms + 1));

        prop_assert_eq!(store.get(&key), None);
        prop_assert!(store.is_empty(), "Stale entry should be deleted on read");
    }

    // FIFO eviction: N + 1 distinct inserts into a cache of size N drop exactly the first key.
    #[test]
    fn prop_fifo_eviction(keys in distinct_keys(2, 20)) {
        prop_assume!(keys.len() >= 2);

        let capacity = keys.len() - 1;
        let (mut store, _) = manual_store(capacity);

        for key in &keys {
            store.set(key.clone(), format!("value_{}", key), None);
        }

        prop_assert_eq!(store.len(), capacity);
        prop_assert_eq!(store.get(&keys[0]), None);
        for key in keys.iter().skip(1) {
            prop_assert_eq!(store.get(key), Some(format!("value_{}", key)));
        }
    }

    // Overwriting live keys in a full cache never changes which key is evicted next.
    #[test]
    fn prop_overwrite_keeps_fifo_position(
        keys in distinct_keys(2, 20),
        rewrites in prop::collection::vec(any::<prop::sample::Index>(), 1..10)
    ) {
        prop_assume!(keys.len() >= 2);

        let (mut store, _) = manual_store(keys.len());
        for key in &keys {
            store.set(key.clone(), "first".to_string(), None);
        }
        for index in &rewrites {
            let key = index.get(&keys);
            prop_assert_eq!(store.set(key.clone(), "second".to_string(), None), None);
        }

        // '-' never appears in generated keys
        let evicted = store.set("new-key", "v".to_string(), None);
        prop_assert_eq!(evicted.as_ref(), Some(&keys[0]));
        prop_assert_eq!(store.len(), keys.len());
    }

    // Overwrite: the second value wins and the size does not change.
    #[test]
    fn prop_overwrite(
        key in valid_key_strategy(),
        value1 in valid_value_strategy(),
        value2 in valid_value_strategy()
    ) {
        let (mut store, _) = manual_store(TEST_MAX_ENTRIES);

        store.set(key.clone(), value1, None);
        let size_before = store.len();
        store.set(key.clone(), value2.clone(), None);

        prop_assert_eq!(store.len(), size_before);
        prop_assert_eq!(store.get(&key), Some(value2));
    }

    // Invalidate is idempotent and safe on absent keys.
    #[test]
    fn prop_invalidate_idempotent(
        key in valid_key_strategy(),
        value in valid_value_strategy(),
        present in any::<bool>()
    ) {
        let (mut store, _) = manual_store(TEST_MAX_ENTRIES);
        if present {
            store.set(key.clone(), value, None);
        }

        let first = store.invalidate(&key);
        let second = store.invalidate(&key);

        prop_assert_eq!(first, present);
        prop_assert!(!second);
        prop_assert_eq!(store.get(&key), None);
    }

    // Sweep removes exactly the expired entries.
    #[test]
    fn prop_sweep_correctness(
        entries in prop::collection::vec(ttl_ms_strategy(), 1..40),
        elapsed_ms in 0u64..100_000
    ) {
        let (mut store, clock) = manual_store(TEST_MAX_ENTRIES);

        for (i, ttl_ms) in entries.iter().enumerate() {
            store.set(format!("key_{}", i), format!("value_{}", i), Some(Duration::from_millis(*ttl_ms)));
        }
        clock.advance(Duration::from_millis(elapsed_ms));

        let expected_removed = entries.iter().filter(|ttl| **ttl <= elapsed_ms).count();
        prop_assert_eq!(store.sweep_expired(), expected_removed);
        prop_assert_eq!(store.len(), entries.len() - expected_removed);

        for (i, ttl_ms) in entries.iter().enumerate() {
            let got = store.get(&format!("key_{}", i));
            if *ttl_ms <= elapsed_ms {
                prop_assert_eq!(got, None);
            } else {
                prop_assert_eq!(got, Some(format!("value_{}", i)));
            }
        }
    }

    // The size bound holds after every operation.
    #[test]
    fn prop_capacity_enforcement(
        entries in prop::collection::vec(
            (valid_key_strategy(), valid_value_strategy()),
            1..200
        )
    ) {
        let max_entries = 50;
        let (mut store, _) = manual_store(max_entries);

        for (key, value) in entries {
            store.set(key, value, None);
            prop_assert!(
                store.len() <= max_entries,
                "Cache size {} exceeds max {}",
                store.len(),
                max_entries
            );
        }
    }

    // Hit and miss counters match what the reads actually returned.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let (mut store, clock) = manual_store(TEST_MAX_ENTRIES);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key, value, None);
                }
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Invalidate { key } => {
                    store.invalidate(&key);
                }
                CacheOp::Advance { ms } => clock.advance(Duration::from_millis(ms)),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");
    }
}
