use std::sync::Arc;

use rust_decimal::Decimal;
use tvl::{TvlChartRange, TvlError};
use tvl_mock::fixtures;

use crate::helpers::{StubAmounts, StubPrices, chart, hours_before_target, tvl_with};

#[tokio::test]
async fn amount_gap_fails_the_whole_chart() {
    let gap = hours_before_target(3);
    let tvl = tvl_with(
        Arc::new(StubAmounts::constant(1_000_000).with_gap(gap)),
        Arc::new(StubPrices::constant(Decimal::ONE)),
    );
    let err = tvl
        .token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7))
        .await
        .expect_err("gap must not be interpolated");
    assert_eq!(err, TvlError::missing_data_point(gap, "amount"));
}

#[tokio::test]
async fn price_gap_fails_the_whole_chart() {
    let gap = hours_before_target(24);
    let tvl = tvl_with(
        Arc::new(StubAmounts::constant(1_000_000)),
        Arc::new(StubPrices::constant(Decimal::ONE).with_gap(gap)),
    );
    let err = tvl
        .token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7))
        .await
        .unwrap_err();
    match err {
        TvlError::MissingDataPoint { timestamp, what } => {
            assert_eq!(timestamp, gap);
            assert_eq!(what, "price");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn first_missing_timestamp_is_reported() {
    let early = hours_before_target(100);
    let late = hours_before_target(2);
    let tvl = tvl_with(
        Arc::new(StubAmounts::constant(1_000_000).with_gap(late)),
        Arc::new(StubPrices::constant(Decimal::ONE).with_gap(early).with_gap(late)),
    );
    let err = tvl
        .token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7))
        .await
        .unwrap_err();
    assert_eq!(err, TvlError::missing_data_point(early, "price"));
}

#[tokio::test]
async fn gap_in_both_series_names_both() {
    let gap = hours_before_target(0);
    let tvl = tvl_with(
        Arc::new(StubAmounts::constant(1_000_000).with_gap(gap)),
        Arc::new(StubPrices::constant(Decimal::ONE).with_gap(gap)),
    );
    let err = tvl
        .token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7))
        .await
        .unwrap_err();
    assert_eq!(err, TvlError::missing_data_point(gap, "amount and price"));
}
