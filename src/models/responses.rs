//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Response body for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    pub key: String,
    pub value: Value,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for the SET operation (PUT /set)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The key that was set
    pub key: String,
    /// TTL the entry was stored with
    pub ttl_ms: u64,
    /// Key evicted to make room, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted: Option<String>,
}

impl SetResponse {
    pub fn new(key: impl Into<String>, ttl_ms: u64, evicted: Option<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' set successfully", key),
            key,
            ttl_ms,
            evicted,
        }
    }
}

/// Response body for the DELETE operation (DELETE /del/:key)
///
/// Invalidation is idempotent; `invalidated` reports whether an entry existed.
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub key: String,
    pub invalidated: bool,
}

impl InvalidateResponse {
    pub fn new(key: impl Into<String>, invalidated: bool) -> Self {
        Self {
            key: key.into(),
            invalidated,
        }
    }
}

/// Response body for the sweep endpoint (POST /sweep)
#[derive(Debug, Clone, Serialize)]
pub struct SweepResponse {
    /// Number of expired entries removed
    pub removed: usize,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured size bound
    pub max_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, max_entries: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            max_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_response_serialize() {
        let resp = GetResponse::new("crossview_3_front_back", json!({"consistent": true}));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["key"], "crossview_3_front_back");
        assert_eq!(json["value"]["consistent"], true);
    }

    #[test]
    fn test_set_response_omits_missing_eviction() {
        let json = serde_json::to_value(SetResponse::new("my_key", 1000, None)).unwrap();
        assert!(json["message"].as_str().unwrap().contains("successfully"));
        assert_eq!(json["ttl_ms"], 1000);
        assert!(json.get("evicted").is_none());
    }

    #[test]
    fn test_set_response_reports_eviction() {
        let json =
            serde_json::to_value(SetResponse::new("b", 1000, Some("a".to_string()))).unwrap();
        assert_eq!(json["evicted"], "a");
    }

    #[test]
    fn test_invalidate_response_serialize() {
        let json = serde_json::to_value(InvalidateResponse::new("gone", false)).unwrap();
        assert_eq!(json["key"], "gone");
        assert_eq!(json["invalidated"], false);
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            expirations: 3,
            total_entries: 100,
        };
        let resp = StatsResponse::new(&stats, 1000);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.max_entries, 1000);
        assert_eq!(resp.expirations, 3);
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
