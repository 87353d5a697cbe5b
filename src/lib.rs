//! Precision Cache - A bounded TTL cache for calculation results
//!
//! Provides a size-bounded cache with lazy TTL expiry, FIFO eviction and
//! periodic sweeping, plus a small HTTP server around it.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::TtlCache;
pub use client::{CacheCategory, CalculationCache, TtlPolicy};
pub use config::Config;
pub use tasks::spawn_sweep_task;
