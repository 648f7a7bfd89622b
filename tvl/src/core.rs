use std::sync::Arc;
use std::time::Duration;

use tvl_core::connector::{AmountProvider, PriceProvider, ProjectCatalog};
use tvl_core::{CacheConfig, TvlConfig, TvlError, UnixTime};
use tvl_middleware::{ChartCache, cache_from_config};

/// Source of the current time used to anchor chart ranges.
pub trait Clock: Send + Sync {
    /// Current time.
    fn now(&self) -> UnixTime;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> UnixTime {
        UnixTime::now()
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub UnixTime);

impl Clock for FixedClock {
    fn now(&self) -> UnixTime {
        self.0
    }
}

/// Orchestrator computing token TVL charts from a catalog and two providers.
pub struct Tvl {
    pub(crate) catalog: Arc<dyn ProjectCatalog>,
    pub(crate) amounts: Arc<dyn AmountProvider>,
    pub(crate) prices: Arc<dyn PriceProvider>,
    pub(crate) cache: Arc<dyn ChartCache>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) cfg: TvlConfig,
}

/// Builder for constructing a `Tvl` orchestrator with custom configuration.
pub struct TvlBuilder {
    catalog: Option<Arc<dyn ProjectCatalog>>,
    amounts: Option<Arc<dyn AmountProvider>>,
    prices: Option<Arc<dyn PriceProvider>>,
    cache: Option<Arc<dyn ChartCache>>,
    clock: Arc<dyn Clock>,
    cfg: TvlConfig,
}

impl Default for TvlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TvlBuilder {
    /// Create a new builder with defaults: 2 hour freshness lag, one hour
    /// chart cache, system clock.
    ///
    /// A catalog, an amount provider and a price provider must be registered
    /// before [`build`](Self::build).
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: None,
            amounts: None,
            prices: None,
            cache: None,
            clock: Arc::new(SystemClock),
            cfg: TvlConfig::default(),
        }
    }

    /// Register the project catalog.
    #[must_use]
    pub fn catalog(mut self, catalog: Arc<dyn ProjectCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Register the provider of historical token amounts.
    #[must_use]
    pub fn amount_provider(mut self, provider: Arc<dyn AmountProvider>) -> Self {
        self.amounts = Some(provider);
        self
    }

    /// Register the provider of historical token prices.
    #[must_use]
    pub fn price_provider(mut self, provider: Arc<dyn PriceProvider>) -> Self {
        self.prices = Some(provider);
        self
    }

    /// Inject a chart cache, overriding the one derived from [`cache_config`](Self::cache_config).
    ///
    /// Sharing one cache between orchestrators shares memoized charts too.
    #[must_use]
    pub fn cache(mut self, cache: Arc<dyn ChartCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Set TTL and capacity of the default chart cache; a zero TTL disables caching.
    #[must_use]
    pub fn cache_config(mut self, cfg: CacheConfig) -> Self {
        self.cfg.cache = cfg;
        self
    }

    /// Set how far behind the current hour the newest chart point lies.
    #[must_use]
    pub const fn freshness_lag(mut self, lag: Duration) -> Self {
        self.cfg.freshness_lag = lag;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: TvlConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Anchor ranges to a custom clock.
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the `Tvl` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the catalog or either provider is missing.
    pub fn build(self) -> Result<Tvl, TvlError> {
        let catalog = self.catalog.ok_or_else(|| {
            TvlError::InvalidArg("no catalog registered; add one via catalog(...)".to_string())
        })?;
        let amounts = self.amounts.ok_or_else(|| {
            TvlError::InvalidArg(
                "no amount provider registered; add one via amount_provider(...)".to_string(),
            )
        })?;
        let prices = self.prices.ok_or_else(|| {
            TvlError::InvalidArg(
                "no price provider registered; add one via price_provider(...)".to_string(),
            )
        })?;
        let cache = self
            .cache
            .unwrap_or_else(|| cache_from_config(&self.cfg.cache));

        Ok(Tvl {
            catalog,
            amounts,
            prices,
            cache,
            clock: self.clock,
            cfg: self.cfg,
        })
    }
}

/// Attribute a provider failure to the provider that produced it.
pub(crate) fn tag_err(provider: &str, e: TvlError) -> TvlError {
    match e {
        e @ (TvlError::NotFound { .. }
        | TvlError::Provider { .. }
        | TvlError::MissingDataPoint { .. }) => e,
        other => TvlError::provider(provider, other.to_string()),
    }
}

impl Tvl {
    /// Start building a new `Tvl` instance.
    #[must_use]
    pub fn builder() -> TvlBuilder {
        TvlBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &TvlConfig {
        &self.cfg
    }

    /// The chart cache in use.
    #[must_use]
    pub fn cache(&self) -> &Arc<dyn ChartCache> {
        &self.cache
    }
}
