use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tvl::{FixedClock, Tvl, TvlChartRange, TvlError, UnixTime};
use tvl_mock::fixtures;

use crate::helpers::{NOW, StubAmounts, StubPrices, chart};

#[test]
fn build_requires_every_piece() {
    let err = Tvl::builder()
        .amount_provider(Arc::new(StubAmounts::constant(1)))
        .price_provider(Arc::new(StubPrices::constant(Decimal::ONE)))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, TvlError::InvalidArg(_)));

    let err = Tvl::builder()
        .catalog(Arc::new(fixtures::catalog()))
        .amount_provider(Arc::new(StubAmounts::constant(1)))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, TvlError::InvalidArg(msg) if msg.contains("price provider")));
}

#[test]
fn defaults_are_two_hour_lag_and_one_hour_cache() {
    let tvl = Tvl::builder()
        .catalog(Arc::new(fixtures::catalog()))
        .amount_provider(Arc::new(StubAmounts::constant(1)))
        .price_provider(Arc::new(StubPrices::constant(Decimal::ONE)))
        .build()
        .unwrap();
    assert_eq!(tvl.config().freshness_lag, Duration::from_secs(2 * 3_600));
    assert_eq!(tvl.cache().name(), "TtlChartCache");
    assert_eq!(tvl.cache().config_json()["ttl_ms"], 3_600_000);
}

#[tokio::test]
async fn freshness_lag_moves_the_last_point() {
    let tvl = Tvl::builder()
        .catalog(Arc::new(fixtures::catalog()))
        .amount_provider(Arc::new(StubAmounts::constant(1_000_000)))
        .price_provider(Arc::new(StubPrices::constant(Decimal::ONE)))
        .clock(Arc::new(FixedClock(UnixTime::new(NOW))))
        .freshness_lag(Duration::ZERO)
        .build()
        .unwrap();
    let points = tvl
        .token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7))
        .await
        .unwrap();
    // 2024-01-10T12:00:00Z
    assert_eq!(points.last().unwrap().timestamp, UnixTime::new(1_704_888_000));
}
