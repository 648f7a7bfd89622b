#![doc = include_str!("../README.md")]
//! tvl-middleware
//!
//! Re-exports for the chart cache layer.

mod cache;

pub use crate::cache::{CacheKey, ChartCache, NoopChartCache, TtlChartCache, cache_from_config};
