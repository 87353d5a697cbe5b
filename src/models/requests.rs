//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::cache::{MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::client::{CacheCategory, TtlPolicy};

/// Request body for the SET operation (PUT /set)
///
/// TTL precedence: `ttl_ms`, then the TTL of `category`, then the default TTL.
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// Any JSON payload
    pub value: Value,
    /// Explicit TTL in milliseconds; zero or negative stores an already-expired entry
    #[serde(default)]
    pub ttl_ms: Option<i64>,
    /// Category deciding the TTL when `ttl_ms` is absent
    #[serde(default)]
    pub category: Option<CacheCategory>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        let value_size = serde_json::to_vec(&self.value).map_or(0, |bytes| bytes.len());
        if value_size > MAX_VALUE_SIZE {
            return Some(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            ));
        }
        None
    }

    /// Resolves the TTL to store the entry with.
    pub fn effective_ttl(&self, policy: &TtlPolicy) -> Duration {
        match (self.ttl_ms, self.category) {
            (Some(ms), _) => Duration::from_millis(ms.max(0) as u64),
            (None, Some(category)) => policy.ttl_for(category),
            (None, None) => policy.default,
        }
    }
}
