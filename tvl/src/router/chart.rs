use std::collections::BTreeMap;

use futures::FutureExt;
use rust_decimal::Decimal;
use tvl_core::{
    CachePolicy, ConfigMapping, TokenTvlChartParams, TvlError, TvlPoint, UnixTime,
    adjusted_range, as_decimal, calculate_value, generate_timestamps, target_timestamp,
};
use tvl_middleware::CacheKey;

use crate::Tvl;
use crate::core::tag_err;

impl Tvl {
    /// Chart of a token's TVL over the requested range, memoized.
    ///
    /// Returns `[timestamp, amount, usdValue]` points in ascending order, one
    /// per timestamp of the range's grid. Identical parameters within the
    /// cache TTL are served without contacting the providers.
    ///
    /// # Errors
    /// - `NotFound` if the project or the token is unknown (no provider is called).
    /// - `MissingDataPoint` if any grid timestamp lacks an amount or a price.
    /// - `Provider` if either upstream fetch fails.
    /// - `InvalidConfig` if the project's configuration is inconsistent.
    pub async fn token_tvl_chart(
        &self,
        params: &TokenTvlChartParams,
    ) -> Result<Vec<TvlPoint>, TvlError> {
        self.token_tvl_chart_with(params, CachePolicy::Use).await
    }

    /// Like [`token_tvl_chart`](Self::token_tvl_chart) with explicit cache policy.
    ///
    /// `CachePolicy::Bypass` always recomputes and leaves the cache untouched.
    ///
    /// # Errors
    /// Same as [`token_tvl_chart`](Self::token_tvl_chart).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tvl::chart::token_tvl_chart",
            skip(self, params),
            fields(token = %params.token, range = %params.range),
            err,
        )
    )]
    pub async fn token_tvl_chart_with(
        &self,
        params: &TokenTvlChartParams,
        policy: CachePolicy,
    ) -> Result<Vec<TvlPoint>, TvlError> {
        if policy == CachePolicy::Bypass {
            return self.compute_token_tvl_chart(params).await;
        }
        let key = CacheKey::from_params(params)?;
        let series = self
            .cache
            .get_or_compute(key, self.compute_token_tvl_chart(params).boxed())
            .await?;
        Ok(series.as_ref().clone())
    }

    /// Compute charts for several tokens concurrently.
    ///
    /// Each request succeeds or fails on its own; a failed request never
    /// truncates another request's series.
    pub async fn token_tvl_charts(
        &self,
        params: &[TokenTvlChartParams],
    ) -> Vec<(TokenTvlChartParams, Result<Vec<TvlPoint>, TvlError>)> {
        let tasks = params.iter().map(|p| async move {
            let res = self.token_tvl_chart(p).await;
            (p.clone(), res)
        });
        futures::future::join_all(tasks).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tvl::chart::compute",
            skip(self, params),
            fields(token = %params.token, range = %params.range),
        )
    )]
    async fn compute_token_tvl_chart(
        &self,
        params: &TokenTvlChartParams,
    ) -> Result<Vec<TvlPoint>, TvlError> {
        let token = &params.token;
        let target = target_timestamp(self.clock.now(), self.cfg.freshness_lag);
        let resolution = params.range.resolution();

        let project = self
            .catalog
            .find_project(&token.project_id)
            .ok_or_else(|| TvlError::not_found(format!("project {}", token.project_id)))?;
        let mapping = ConfigMapping::new(project, self.catalog.token_registry())?;

        let configs = mapping.amounts_by_project_and_token(&project.id, token);
        let first = configs
            .first()
            .ok_or_else(|| TvlError::not_found(format!("token amount config for {token}")))?;

        let range = adjusted_range(params.range, resolution, first.since_timestamp, target);
        let price_config = mapping.price_config_from_amount_config(first);
        let timestamps = generate_timestamps(range, resolution);

        if timestamps.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(range = %range, "token has no data in the requested range");
            return Ok(Vec::new());
        }

        let amounts_fut = async {
            self.amounts
                .amounts(&configs, range, &timestamps)
                .await
                .map_err(|e| tag_err(self.amounts.name(), e))
        };
        let prices_fut = async {
            self.prices
                .prices(&price_config, range, resolution)
                .await
                .map_err(|e| tag_err(self.prices.name(), e))
        };
        let (amounts, prices) = tokio::try_join!(amounts_fut, prices_fut)?;

        combine(&timestamps, &amounts, &prices, first.decimals)
    }
}

/// Join amounts and prices on the grid and value each point in USD.
fn combine(
    timestamps: &[UnixTime],
    amounts: &BTreeMap<UnixTime, u128>,
    prices: &BTreeMap<UnixTime, Decimal>,
    decimals: u8,
) -> Result<Vec<TvlPoint>, TvlError> {
    timestamps
        .iter()
        .map(|&ts| {
            let (amount, price) = match (amounts.get(&ts), prices.get(&ts)) {
                (Some(a), Some(p)) => (*a, *p),
                (None, Some(_)) => return Err(TvlError::missing_data_point(ts, "amount")),
                (Some(_), None) => return Err(TvlError::missing_data_point(ts, "price")),
                (None, None) => {
                    return Err(TvlError::missing_data_point(ts, "amount and price"));
                }
            };
            let usd_cents = calculate_value(amount, price, decimals)?;
            Ok(TvlPoint {
                timestamp: ts,
                amount: as_decimal(amount, u32::from(decimals))?,
                usd_value: as_decimal(usd_cents, 2)?,
            })
        })
        .collect()
}
