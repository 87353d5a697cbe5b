//! TTL Policy
//!
//! Maps categories of cached data to their time-to-live.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default TTL for uncategorised data (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// TTL for precision calculation results (15 minutes)
pub const CALCULATION_TTL: Duration = Duration::from_secs(15 * 60);

/// TTL for cross-view consistency results (10 minutes)
pub const CROSS_VIEW_TTL: Duration = Duration::from_secs(10 * 60);

// == Cache Category ==
/// Kind of data being cached; decides the TTL it is stored with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheCategory {
    #[default]
    Default,
    /// Heavy precision calculations
    Calculation,
    /// Cross-view consistency checks
    CrossView,
}

// == TTL Policy ==
/// Per-category TTLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    pub default: Duration,
    pub calculation: Duration,
    pub cross_view: Duration,
}

impl TtlPolicy {
    pub fn ttl_for(&self, category: CacheCategory) -> Duration {
        match category {
            CacheCategory::Default => self.default,
            CacheCategory::Calculation => self.calculation,
            CacheCategory::CrossView => self.cross_view,
        }
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self {
            default: DEFAULT_TTL,
            calculation: CALCULATION_TTL,
            cross_view: CROSS_VIEW_TTL,
        }
    }
}
