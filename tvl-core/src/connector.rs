use std::collections::BTreeMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::{
    AmountConfig, PriceConfig, Project, ProjectId, TimeRange, TokenInfo, TvlChartResolution,
    TvlError, UnixTime,
};

/// Read-only lookup of tracked projects and the tokens they may hold.
pub trait ProjectCatalog: Send + Sync {
    /// Find a project (layer 2, layer 3 or bridge) by identifier.
    fn find_project(&self, id: &ProjectId) -> Option<&Project>;

    /// Registry used to resolve escrow token symbols.
    fn token_registry(&self) -> &[TokenInfo];
}

/// Focused role trait for providers of historical token holdings.
#[async_trait]
pub trait AmountProvider: Send + Sync {
    /// Provider name used when tagging errors and logs.
    fn name(&self) -> &'static str;

    /// Fetch raw (integer, unscaled) amounts for the given timestamps.
    ///
    /// When several configs are passed they describe the same logical token in
    /// different escrows; the returned amount for a timestamp is their sum.
    /// Timestamps without data are simply absent from the map.
    async fn amounts(
        &self,
        configs: &[AmountConfig],
        range: TimeRange,
        timestamps: &[UnixTime],
    ) -> Result<BTreeMap<UnixTime, u128>, TvlError>;
}

/// Focused role trait for providers of historical USD prices.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Provider name used when tagging errors and logs.
    fn name(&self) -> &'static str;

    /// Fetch USD prices over `range` sampled at `resolution`.
    async fn prices(
        &self,
        config: &PriceConfig,
        range: TimeRange,
        resolution: TvlChartResolution,
    ) -> Result<BTreeMap<UnixTime, Decimal>, TvlError>;
}
