use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tvl::{
    CacheConfig, CachePolicy, ChartCache, FixedClock, TtlChartCache, Tvl, TvlChartRange,
    TvlError, UnixTime,
};
use tvl_mock::fixtures;

use crate::helpers::{NOW, StubAmounts, StubPrices, chart, tvl_with};

#[tokio::test]
async fn second_identical_request_is_served_from_cache() {
    let amounts = Arc::new(StubAmounts::constant(1_000_000));
    let prices = Arc::new(StubPrices::constant(Decimal::ONE));
    let tvl = tvl_with(amounts.clone(), prices.clone());
    let req = chart(fixtures::paradex_usdc(), TvlChartRange::D30);

    let first = tvl.token_tvl_chart(&req).await.unwrap();
    let second = tvl.token_tvl_chart(&req).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(amounts.calls(), 1, "second call should be cached");
    assert_eq!(prices.calls(), 1, "second call should be cached");
}

#[tokio::test]
async fn different_range_is_a_different_entry() {
    let amounts = Arc::new(StubAmounts::constant(1_000_000));
    let prices = Arc::new(StubPrices::constant(Decimal::ONE));
    let tvl = tvl_with(amounts.clone(), prices.clone());

    tvl.token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7))
        .await
        .unwrap();
    tvl.token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D90))
        .await
        .unwrap();
    assert_eq!(amounts.calls(), 2);
}

#[tokio::test]
async fn bypass_recomputes_and_leaves_cache_alone() {
    let amounts = Arc::new(StubAmounts::constant(1_000_000));
    let prices = Arc::new(StubPrices::constant(Decimal::ONE));
    let tvl = tvl_with(amounts.clone(), prices.clone());
    let req = chart(fixtures::paradex_usdc(), TvlChartRange::D7);

    tvl.token_tvl_chart_with(&req, CachePolicy::Bypass)
        .await
        .unwrap();
    tvl.token_tvl_chart_with(&req, CachePolicy::Bypass)
        .await
        .unwrap();
    assert_eq!(amounts.calls(), 2);

    // Bypassed results were not stored.
    tvl.token_tvl_chart(&req).await.unwrap();
    assert_eq!(amounts.calls(), 3);
    tvl.token_tvl_chart(&req).await.unwrap();
    assert_eq!(amounts.calls(), 3);
}

#[tokio::test]
async fn failures_are_retried() {
    let amounts = Arc::new(
        StubAmounts::constant(1).with_error(TvlError::provider("upstream", "timeout")),
    );
    let prices = Arc::new(StubPrices::constant(Decimal::ONE));
    let tvl = tvl_with(amounts.clone(), prices.clone());
    let req = chart(fixtures::paradex_usdc(), TvlChartRange::D7);

    assert!(tvl.token_tvl_chart(&req).await.is_err());
    assert!(tvl.token_tvl_chart(&req).await.is_err());
    assert_eq!(amounts.calls(), 2, "errors must not be cached");
}

#[tokio::test]
async fn zero_ttl_disables_memoization() {
    let amounts = Arc::new(StubAmounts::constant(1_000_000));
    let tvl = Tvl::builder()
        .catalog(Arc::new(fixtures::catalog()))
        .amount_provider(amounts.clone())
        .price_provider(Arc::new(StubPrices::constant(Decimal::ONE)))
        .clock(Arc::new(FixedClock(UnixTime::new(NOW))))
        .cache_config(CacheConfig {
            ttl_ms: 0,
            max_entries: 16,
        })
        .build()
        .unwrap();
    let req = chart(fixtures::paradex_usdc(), TvlChartRange::D7);

    tvl.token_tvl_chart(&req).await.unwrap();
    tvl.token_tvl_chart(&req).await.unwrap();
    assert_eq!(tvl.cache().name(), "NoopChartCache");
    assert_eq!(amounts.calls(), 2);
}

#[tokio::test]
async fn injected_cache_is_shared_between_orchestrators() {
    let cache: Arc<dyn ChartCache> =
        Arc::new(TtlChartCache::new(Duration::from_secs(3_600), 64));
    let amounts = Arc::new(StubAmounts::constant(1_000_000));
    let build = || {
        Tvl::builder()
            .catalog(Arc::new(fixtures::catalog()))
            .amount_provider(amounts.clone())
            .price_provider(Arc::new(StubPrices::constant(Decimal::ONE)))
            .clock(Arc::new(FixedClock(UnixTime::new(NOW))))
            .cache(Arc::clone(&cache))
            .build()
            .unwrap()
    };
    let req = chart(fixtures::hop_usdc(), TvlChartRange::D180);

    build().token_tvl_chart(&req).await.unwrap();
    build().token_tvl_chart(&req).await.unwrap();
    assert_eq!(amounts.calls(), 1);
}

#[tokio::test]
async fn concurrent_identical_requests_fetch_once() {
    let amounts = Arc::new(StubAmounts::constant(1_000_000));
    let prices = Arc::new(StubPrices::constant(Decimal::ONE));
    let tvl = Arc::new(tvl_with(amounts.clone(), prices.clone()));
    let req = chart(fixtures::paradex_usdc(), TvlChartRange::D30);

    let tasks = (0..6).map(|_| {
        let tvl = Arc::clone(&tvl);
        let req = req.clone();
        tokio::spawn(async move { tvl.token_tvl_chart(&req).await })
    });
    for res in futures::future::join_all(tasks).await {
        res.unwrap().unwrap();
    }
    assert_eq!(amounts.calls(), 1);
    assert_eq!(prices.calls(), 1);
}
