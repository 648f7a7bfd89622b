use std::sync::Arc;

use rust_decimal::Decimal;
use tvl::{TimeUnit, TvlChartRange, UnixTime};
use tvl_mock::fixtures::{self, HOP_USDC_ESCROWS, HOP_USDC_SECOND_SINCE, HOP_USDC_SINCE};
use tvl_mock::{MockAmountProvider, MockPriceProvider};

use crate::helpers::{StubAmounts, StubPrices, chart, tvl_with};

#[tokio::test]
async fn every_escrow_of_the_token_is_fetched() {
    let amounts = Arc::new(StubAmounts::constant(1_000_000));
    let prices = Arc::new(StubPrices::constant(Decimal::ONE));
    let tvl = tvl_with(amounts.clone(), prices.clone());

    tvl.token_tvl_chart(&chart(fixtures::hop_usdc(), TvlChartRange::D30))
        .await
        .unwrap();

    let seen = amounts.seen();
    assert_eq!(seen.len(), 1);
    let escrows: Vec<&str> = seen[0].iter().map(|c| c.escrow.as_str()).collect();
    assert_eq!(escrows, HOP_USDC_ESCROWS, "all escrows, earliest first");
}

#[tokio::test]
async fn max_range_starts_at_the_earliest_escrow() {
    let amounts = Arc::new(StubAmounts::constant(1_000_000));
    let prices = Arc::new(StubPrices::constant(Decimal::ONE));
    let tvl = tvl_with(amounts.clone(), prices.clone());

    let points = tvl
        .token_tvl_chart(&chart(fixtures::hop_usdc(), TvlChartRange::Max))
        .await
        .unwrap();

    let earliest = UnixTime::new(HOP_USDC_SINCE).to_end_of(TimeUnit::Day);
    assert_eq!(points[0].timestamp, earliest);
    assert_eq!(prices.seen()[0].since_timestamp, UnixTime::new(HOP_USDC_SINCE));
    assert_eq!(amounts.seen()[0].len(), 2);
}

#[tokio::test]
async fn amounts_of_live_escrows_are_summed() {
    let tvl = tvl_with(
        Arc::new(MockAmountProvider::new()),
        Arc::new(MockPriceProvider::new()),
    );
    let points = tvl
        .token_tvl_chart(&chart(fixtures::hop_usdc(), TvlChartRange::Max))
        .await
        .unwrap();

    let second = UnixTime::new(HOP_USDC_SECOND_SINCE);
    let at = |ts: UnixTime| points.iter().find(|p| p.timestamp == ts).unwrap();
    // Daily points sit at midnight, where each escrow holds 1000 USDC.
    assert_eq!(at(second.add(-1, TimeUnit::Day)).amount, Decimal::from(1_000));
    assert_eq!(at(second).amount, Decimal::from(2_000));
    assert_eq!(at(second).usd_value, Decimal::from(2_000));
}
