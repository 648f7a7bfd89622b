//! Deterministic fixture data and providers for CI-safe tests and examples.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tvl_core::connector::{AmountProvider, PriceProvider};
use tvl_core::{
    AmountConfig, PriceConfig, TimeRange, TimeUnit, TvlChartResolution, TvlError, UnixTime,
    generate_timestamps,
};

pub mod fixtures;

/// Price feed id that always fails, for error-path tests.
pub const FAILING_PRICE_ID: &str = "FAIL";

#[derive(Default)]
struct Behavior {
    gaps: HashSet<UnixTime>,
    fail: bool,
    delay: Option<Duration>,
}

impl Behavior {
    async fn before_call(&self, provider: &'static str) -> Result<(), TvlError> {
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        if self.fail {
            return Err(TvlError::provider(provider, "forced failure"));
        }
        Ok(())
    }
}

/// Amount provider returning a deterministic balance for every live config.
///
/// A config is live from its `since_timestamp` on; a timestamp where no
/// config is live is absent from the result. Balances cycle through
/// `1000..1024` whole tokens by hour of day.
#[derive(Default)]
pub struct MockAmountProvider {
    behavior: Behavior,
    calls: Arc<AtomicUsize>,
}

impl MockAmountProvider {
    /// Provider with complete data and no latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Omit `ts` from every response.
    #[must_use]
    pub fn with_gap(mut self, ts: UnixTime) -> Self {
        self.behavior.gaps.insert(ts);
        self
    }

    /// Fail every call with a provider error.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.behavior.fail = true;
        self
    }

    /// Sleep before answering.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.behavior.delay = Some(delay);
        self
    }

    /// Shared counter of `amounts` invocations.
    #[must_use]
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Raw balance of one config at `ts`.
    #[must_use]
    pub fn raw_amount(config: &AmountConfig, ts: UnixTime) -> u128 {
        let hour_of_day = (ts.to_seconds() / TimeUnit::Hour.seconds()).rem_euclid(24);
        let whole = 1_000 + u128::try_from(hour_of_day).unwrap_or(0);
        whole * 10u128.pow(u32::from(config.decimals))
    }
}

#[async_trait]
impl AmountProvider for MockAmountProvider {
    fn name(&self) -> &'static str {
        "tvl-mock/amounts"
    }

    async fn amounts(
        &self,
        configs: &[AmountConfig],
        _range: TimeRange,
        timestamps: &[UnixTime],
    ) -> Result<BTreeMap<UnixTime, u128>, TvlError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.behavior.before_call(self.name()).await?;

        let mut out = BTreeMap::new();
        for &ts in timestamps {
            if self.behavior.gaps.contains(&ts) {
                continue;
            }
            let mut live = configs.iter().filter(|c| c.since_timestamp <= ts).peekable();
            if live.peek().is_none() {
                continue;
            }
            let total: u128 = live.map(|c| Self::raw_amount(c, ts)).sum();
            out.insert(ts, total);
        }
        Ok(out)
    }
}

/// Price provider with fixed feeds: `usd-coin` at 1.00 and `ethereum`
/// between 2000 and 2009 by day.
#[derive(Default)]
pub struct MockPriceProvider {
    behavior: Behavior,
    calls: Arc<AtomicUsize>,
}

impl MockPriceProvider {
    /// Provider with complete data and no latency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Omit `ts` from every response.
    #[must_use]
    pub fn with_gap(mut self, ts: UnixTime) -> Self {
        self.behavior.gaps.insert(ts);
        self
    }

    /// Fail every call with a provider error.
    #[must_use]
    pub const fn failing(mut self) -> Self {
        self.behavior.fail = true;
        self
    }

    /// Sleep before answering.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.behavior.delay = Some(delay);
        self
    }

    /// Shared counter of `prices` invocations.
    #[must_use]
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Price of a feed at `ts`, if the feed exists.
    #[must_use]
    pub fn price(price_id: &str, ts: UnixTime) -> Option<Decimal> {
        match price_id {
            "usd-coin" => Some(Decimal::ONE),
            "ethereum" => {
                let day = ts.to_seconds().div_euclid(TimeUnit::Day.seconds());
                Some(Decimal::from(2_000 + day.rem_euclid(10)))
            }
            _ => None,
        }
    }
}

#[async_trait]
impl PriceProvider for MockPriceProvider {
    fn name(&self) -> &'static str {
        "tvl-mock/prices"
    }

    async fn prices(
        &self,
        config: &PriceConfig,
        range: TimeRange,
        resolution: TvlChartResolution,
    ) -> Result<BTreeMap<UnixTime, Decimal>, TvlError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.behavior.before_call(self.name()).await?;
        if config.price_id == FAILING_PRICE_ID {
            return Err(TvlError::provider(self.name(), "forced failure: prices"));
        }

        let mut out = BTreeMap::new();
        for ts in generate_timestamps(range, resolution) {
            if self.behavior.gaps.contains(&ts) {
                continue;
            }
            let price = Self::price(&config.price_id, ts).ok_or_else(|| {
                TvlError::provider(self.name(), format!("no feed {}", config.price_id))
            })?;
            out.insert(ts, price);
        }
        Ok(out)
    }
}
