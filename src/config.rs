//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::client::TtlPolicy;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// TTL in milliseconds for entries stored without a category or explicit TTL
    pub default_ttl_ms: u64,
    /// TTL in milliseconds for calculation results
    pub calculation_ttl_ms: u64,
    /// TTL in milliseconds for cross-view consistency results
    pub cross_view_ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Expiry sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `DEFAULT_TTL_MS` - Default TTL (default: 300000)
    /// - `CALCULATION_TTL_MS` - Calculation result TTL (default: 900000)
    /// - `CROSS_VIEW_TTL_MS` - Cross-view result TTL (default: 600000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL_SECS` - Expiry sweep frequency (default: 60)
    ///
    /// Unset or unparseable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: env_or("MAX_ENTRIES", defaults.max_entries),
            default_ttl_ms: env_or("DEFAULT_TTL_MS", defaults.default_ttl_ms),
            calculation_ttl_ms: env_or("CALCULATION_TTL_MS", defaults.calculation_ttl_ms),
            cross_view_ttl_ms: env_or("CROSS_VIEW_TTL_MS", defaults.cross_view_ttl_ms),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval: env_or("SWEEP_INTERVAL_SECS", defaults.sweep_interval),
        }
    }

    /// TTLs per cache category.
    pub fn ttl_policy(&self) -> TtlPolicy {
        TtlPolicy {
            default: Duration::from_millis(self.default_ttl_ms),
            calculation: Duration::from_millis(self.calculation_ttl_ms),
            cross_view: Duration::from_millis(self.cross_view_ttl_ms),
        }
    }

    /// Sweep period, never shorter than one second.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval.max(1))
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        let policy = TtlPolicy::default();
        Self {
            max_entries: 1000,
            default_ttl_ms: policy.default.as_millis() as u64,
            calculation_ttl_ms: policy.calculation.as_millis() as u64,
            cross_view_ttl_ms: policy.cross_view.as_millis() as u64,
            server_port: 3000,
            sweep_interval: 60,
        }
    }
}
