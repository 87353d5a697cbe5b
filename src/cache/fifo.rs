//! Insertion Order Module
//!
//! Tracks key insertion order for FIFO eviction.

use std::collections::VecDeque;

// == Insertion Order ==
/// Keys in the order they were first inserted, tagged with a sequence number.
///
/// - Front = oldest insertion
/// - Back = newest insertion
///
/// Removing a key from the cache leaves its slot in the queue. A slot is live
/// only while the owner still maps that key to the same sequence number, so
/// stale slots are skipped on pop and dropped by [`InsertionOrder::compact`].
#[derive(Debug, Default)]
pub struct InsertionOrder {
    queue: VecDeque<(u64, String)>,
    next_seq: u64,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            next_seq: 0,
        }
    }

    // == Push ==
    /// Records `key` as the newest insertion and returns its sequence number.
    pub fn push(&mut self, key: &str) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push_back((seq, key.to_string()));
        seq
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest live key, discarding stale slots on the way.
    pub fn pop_oldest<F>(&mut self, is_live: F) -> Option<String>
    where
        F: Fn(&str, u64) -> bool,
    {
        while let Some((seq, key)) = self.queue.pop_front() {
            if is_live(key.as_str(), seq) {
                return Some(key);
            }
        }
        None
    }

    // == Compact ==
    /// Drops every stale slot.
    pub fn compact<F>(&mut self, is_live: F)
    where
        F: Fn(&str, u64) -> bool,
    {
        self.queue.retain(|(seq, key)| is_live(key.as_str(), *seq));
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    /// Number of queued slots, stale ones included.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
