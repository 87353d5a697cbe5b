//! Cache Client Module
//!
//! The caller side of the cache: per-category TTLs, key construction and
//! compute-on-miss.

mod keys;
mod memo;
mod policy;

pub use keys::{calculation_key, cross_view_key, precision_key};
pub use memo::CalculationCache;
pub use policy::{CacheCategory, TtlPolicy, CALCULATION_TTL, CROSS_VIEW_TTL, DEFAULT_TTL};
