//! Configuration types shared across the orchestrator, providers and middleware.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ChainId, EscrowSource, EthereumAddress, ProjectId, TokenAddress, UnixTime};

/// Describes where and how to read historical holdings of one token in one escrow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountConfig {
    /// Stable identifier, `<project>-<chain>-<escrow>-<symbol>`.
    pub id: String,
    /// Owning project.
    pub project: ProjectId,
    /// Chain of the escrow and token.
    pub chain: ChainId,
    /// Escrow holding the token.
    pub escrow: EthereumAddress,
    /// Token contract or `native`.
    pub address: TokenAddress,
    /// Ticker.
    pub symbol: String,
    /// Fixed-point scale of raw amounts.
    pub decimals: u8,
    /// Earliest timestamp data exists.
    pub since_timestamp: UnixTime,
    /// Price feed identifier.
    pub price_id: String,
    /// Bridge relationship of the escrow.
    pub source: EscrowSource,
}

/// Identifies the price feed for a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceConfig {
    /// Price feed identifier (e.g. a coingecko id).
    pub price_id: String,
    /// Earliest timestamp prices are needed from.
    pub since_timestamp: UnixTime,
}

/// Controls how a chart request interacts with the memoization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CachePolicy {
    /// Serve from cache when fresh, populate it otherwise.
    #[default]
    Use,
    /// Always compute fresh data and leave the cache untouched.
    Bypass,
}

/// Memoization settings for chart results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Time-to-live of a cached chart in milliseconds; `0` disables caching.
    pub ttl_ms: u64,
    /// Upper bound on the number of cached charts.
    pub max_entries: u64,
}

impl CacheConfig {
    /// TTL as a `Duration`, or `None` when caching is disabled.
    #[must_use]
    pub const fn ttl(&self) -> Option<Duration> {
        if self.ttl_ms == 0 || self.max_entries == 0 {
            None
        } else {
            Some(Duration::from_millis(self.ttl_ms))
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: 60 * 60 * 1_000,
            max_entries: 1_024,
        }
    }
}

/// Global configuration for the `Tvl` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvlConfig {
    /// How far behind the current hour the newest chart point lies.
    ///
    /// Data for the most recent hours may not be finalized upstream yet.
    pub freshness_lag: Duration,
    /// Chart memoization settings.
    pub cache: CacheConfig,
}

impl Default for TvlConfig {
    fn default() -> Self {
        Self {
            freshness_lag: Duration::from_secs(2 * 60 * 60),
            cache: CacheConfig::default(),
        }
    }
}
