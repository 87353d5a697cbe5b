//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries, bounding
//! memory held by keys that are written once and never read again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Clock;
use crate::client::CalculationCache;

/// Spawns a task that sweeps `cache` every `interval`.
///
/// Sweeps run sequentially inside one task, so they never overlap. Abort the
/// returned handle to stop it.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(CalculationCache::new(1000, TtlPolicy::default())));
/// let sweep_handle = spawn_sweep_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<V, C>(
    cache: Arc<RwLock<CalculationCache<V, C>>>,
    interval: Duration,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "Starting expiry sweep task");

        loop {
            tokio::time::sleep(interval).await;

            let (removed, remaining) = {
                let mut cache_guard = cache.write().await;
                (cache_guard.sweep_expired(), cache_guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "Expiry sweep removed expired entries");
            } else {
                debug!(remaining, "Expiry sweep found no expired entries");
            }
        }
    })
}
