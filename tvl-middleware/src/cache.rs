use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::BoxFuture;
use moka::future::Cache;
use tvl_core::{CacheConfig, TokenTvlChartParams, TvlError, TvlPoint};

/// Canonical identity of a chart request: the JSON serialization of its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    const NAMESPACE: &'static str = "tokenTvlChart";

    /// Derive the key of a chart request.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the parameters cannot be serialized.
    pub fn from_params(params: &TokenTvlChartParams) -> Result<Self, TvlError> {
        let body =
            serde_json::to_string(params).map_err(|e| TvlError::InvalidArg(e.to_string()))?;
        Ok(Self(format!("{}:{body}", Self::NAMESPACE)))
    }

    /// Borrow the serialized key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Memoization layer for computed chart series.
#[async_trait]
pub trait ChartCache: Send + Sync {
    /// Return the cached series for `key`, or run `compute` and cache its success.
    ///
    /// Failures are never cached. Implementations may coalesce concurrent
    /// callers with the same key onto a single `compute`.
    async fn get_or_compute(
        &self,
        key: CacheKey,
        compute: BoxFuture<'_, Result<Vec<TvlPoint>, TvlError>>,
    ) -> Result<Arc<Vec<TvlPoint>>, TvlError>;

    /// Drop the entry for `key`, if any.
    async fn invalidate(&self, key: &CacheKey);

    /// Drop every entry.
    fn invalidate_all(&self);

    /// Human-readable cache name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}

/// TTL cache with bounded capacity backed by `moka`.
pub struct TtlChartCache {
    inner: Cache<CacheKey, Arc<Vec<TvlPoint>>>,
    ttl: Duration,
    max_entries: u64,
}

impl TtlChartCache {
    /// Create a cache keeping at most `max_entries` charts for `ttl` each.
    #[must_use]
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        // Avoid a zero-capacity cache that would evict every insert
        let max_entries = max_entries.max(1);
        let inner = Cache::builder()
            .time_to_live(ttl)
            .max_capacity(max_entries)
            .build();
        Self {
            inner,
            ttl,
            max_entries,
        }
    }

    /// Number of live entries (approximate, for diagnostics).
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

#[async_trait]
impl ChartCache for TtlChartCache {
    async fn get_or_compute(
        &self,
        key: CacheKey,
        compute: BoxFuture<'_, Result<Vec<TvlPoint>, TvlError>>,
    ) -> Result<Arc<Vec<TvlPoint>>, TvlError> {
        #[cfg(feature = "tracing")]
        let label = key.to_string();
        let init = async move {
            #[cfg(feature = "tracing")]
            tracing::debug!(key = %label, "chart cache miss");
            compute.await.map(Arc::new)
        };
        self.inner
            .try_get_with(key, init)
            .await
            .map_err(|e| (*e).clone())
    }

    async fn invalidate(&self, key: &CacheKey) {
        self.inner.invalidate(key).await;
    }

    fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    fn name(&self) -> &'static str {
        "TtlChartCache"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "ttl_ms": u64::try_from(self.ttl.as_millis()).unwrap_or(u64::MAX),
            "max_entries": self.max_entries,
        })
    }
}

/// Pass-through cache that always computes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopChartCache;

#[async_trait]
impl ChartCache for NoopChartCache {
    async fn get_or_compute(
        &self,
        _key: CacheKey,
        compute: BoxFuture<'_, Result<Vec<TvlPoint>, TvlError>>,
    ) -> Result<Arc<Vec<TvlPoint>>, TvlError> {
        compute.await.map(Arc::new)
    }

    async fn invalidate(&self, _key: &CacheKey) {}

    fn invalidate_all(&self) {}

    fn name(&self) -> &'static str {
        "NoopChartCache"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({})
    }
}

/// Build the cache described by `cfg`; a zero TTL or capacity disables caching.
#[must_use]
pub fn cache_from_config(cfg: &CacheConfig) -> Arc<dyn ChartCache> {
    match cfg.ttl() {
        Some(ttl) => Arc::new(TtlChartCache::new(ttl, cfg.max_entries)),
        None => Arc::new(NoopChartCache),
    }
}
