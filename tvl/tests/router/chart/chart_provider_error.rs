use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tvl::{TvlChartRange, TvlError};
use tvl_mock::fixtures;
use tvl_mock::{MockAmountProvider, MockPriceProvider};

use crate::helpers::{StubAmounts, StubPrices, chart, tvl_with};

#[tokio::test]
async fn provider_error_is_propagated_as_is() {
    let tvl = tvl_with(
        Arc::new(StubAmounts::constant(1).with_error(TvlError::provider("upstream", "503"))),
        Arc::new(StubPrices::constant(Decimal::ONE)),
    );
    let err = tvl
        .token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7))
        .await
        .unwrap_err();
    assert_eq!(err, TvlError::provider("upstream", "503"));
}

#[tokio::test]
async fn untagged_errors_are_attributed_to_the_provider() {
    let tvl = tvl_with(
        Arc::new(StubAmounts::constant(1)),
        Arc::new(StubPrices::constant(Decimal::ONE).with_error(TvlError::Data("bad row".into()))),
    );
    let err = tvl
        .token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7))
        .await
        .unwrap_err();
    match err {
        TvlError::Provider { provider, msg } => {
            assert_eq!(provider, "stub-prices");
            assert!(msg.contains("bad row"), "{msg}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn failing_price_fails_fast_while_amounts_are_slow() {
    let tvl = tvl_with(
        Arc::new(MockAmountProvider::new().with_delay(Duration::from_secs(30))),
        Arc::new(MockPriceProvider::new().failing()),
    );
    let res = tokio::time::timeout(
        Duration::from_secs(5),
        tvl.token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7)),
    )
    .await
    .expect("price failure should short-circuit the join");
    assert!(matches!(res, Err(TvlError::Provider { .. })));
}
