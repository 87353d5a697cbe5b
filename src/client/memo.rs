//! Calculation Cache
//!
//! Wraps a [`TtlCache`] with a [`TtlPolicy`] and compute-on-miss helpers.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::{CacheStats, Clock, SystemClock, TtlCache};
use crate::client::{CacheCategory, TtlPolicy};

// == Calculation Cache ==
/// A cache for calculation results whose TTL depends on the result category.
///
/// Each owner constructs its own instance; separate instances never share or
/// reconcile state.
#[derive(Debug)]
pub struct CalculationCache<V, C = SystemClock> {
    cache: TtlCache<V, C>,
    policy: TtlPolicy,
}

impl<V: Clone> CalculationCache<V, SystemClock> {
    /// Creates a cache of `max_size` entries backed by the system clock.
    pub fn new(max_size: usize, policy: TtlPolicy) -> Self {
        Self::with_clock(max_size, policy, SystemClock)
    }
}

impl<V: Clone, C: Clock> CalculationCache<V, C> {
    pub fn with_clock(max_size: usize, policy: TtlPolicy, clock: C) -> Self {
        Self {
            cache: TtlCache::with_clock(max_size, policy.default, clock),
            policy,
        }
    }

    // == Get Or Compute ==
    /// Returns the cached value for `key`, or runs `compute` and caches its
    /// result with the TTL of `category`.
    ///
    /// Errors from `compute` are returned unchanged and nothing is cached.
    pub fn get_or_compute<E, F>(
        &mut self,
        category: CacheCategory,
        key: &str,
        compute: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.cache.get(key) {
            trace!(key, "Calculation cache hit");
            return Ok(value);
        }

        debug!(key, ?category, "Calculation cache miss, computing");
        let value = compute()?;
        self.set(category, key, value.clone());
        Ok(value)
    }

    /// Async form of [`CalculationCache::get_or_compute`].
    pub async fn get_or_compute_async<E, F, Fut>(
        &mut self,
        category: CacheCategory,
        key: &str,
        compute: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.cache.get(key) {
            trace!(key, "Calculation cache hit");
            return Ok(value);
        }

        debug!(key, ?category, "Calculation cache miss, computing");
        let value = compute().await?;
        self.set(category, key, value.clone());
        Ok(value)
    }

    /// Stores `value` with the TTL of `category`. Returns the evicted key, if any.
    pub fn set(&mut self, category: CacheCategory, key: &str, value: V) -> Option<String> {
        self.set_with_ttl(key, value, Some(self.policy.ttl_for(category)))
    }

    /// Stores `value` with an explicit TTL, or the default TTL when `None`.
    pub fn set_with_ttl(&mut self, key: &str, value: V, ttl: Option<Duration>) -> Option<String> {
        self.cache.set(key, value, ttl)
    }

    pub fn get(&mut self, key: &str) -> Option<V> {
        self.cache.get(key)
    }

    pub fn invalidate(&mut self, key: &str) -> bool {
        self.cache.invalidate(key)
    }

    pub fn sweep_expired(&mut self) -> usize {
        self.cache.sweep_expired()
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn policy(&self) -> &TtlPolicy {
        &self.policy
    }

    pub fn max_size(&self) -> usize {
        self.cache.max_size()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
