use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tvl::TvlChartRange;
use tvl_mock::fixtures;
use tvl_mock::{MockAmountProvider, MockPriceProvider};

use crate::helpers::{StubAmounts, StubPrices, chart, tvl_with};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[tokio::test]
async fn one_usdc_at_one_dollar() {
    let tvl = tvl_with(
        Arc::new(StubAmounts::constant(1_000_000)),
        Arc::new(StubPrices::constant(dec("1.00"))),
    );
    let points = tvl
        .token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7))
        .await
        .unwrap();

    let last = points.last().unwrap();
    assert_eq!(last.amount, Decimal::ONE);
    assert_eq!(last.usd_value, dec("1.00"));
    assert_eq!(last.usd_value.scale(), 2);
    assert_eq!(
        serde_json::to_string(last).unwrap(),
        format!("[{},1.0,1.0]", last.timestamp.to_seconds())
    );
}

#[tokio::test]
async fn price_is_rounded_to_cents_before_valuation() {
    // 1.235 rounds to 124 cents; 2 USDC are worth 2.48.
    let tvl = tvl_with(
        Arc::new(StubAmounts::constant(2_000_000)),
        Arc::new(StubPrices::constant(dec("1.235"))),
    );
    let points = tvl
        .token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7))
        .await
        .unwrap();
    assert!(points.iter().all(|p| p.amount == dec("2")));
    assert!(points.iter().all(|p| p.usd_value == dec("2.48")));
}

#[tokio::test]
async fn sub_cent_values_truncate() {
    // 0.000001 USDC at 1.00 is worth 0.0001 cents.
    let tvl = tvl_with(
        Arc::new(StubAmounts::constant(1)),
        Arc::new(StubPrices::constant(Decimal::ONE)),
    );
    let points = tvl
        .token_tvl_chart(&chart(fixtures::paradex_usdc(), TvlChartRange::D7))
        .await
        .unwrap();
    assert!(points.iter().all(|p| p.amount == dec("0.000001")));
    assert!(points.iter().all(|p| p.usd_value.is_zero()));
}

#[tokio::test]
async fn eighteen_decimal_token_uses_its_own_price_feed() {
    let prices = Arc::new(StubPrices::constant(dec("2000")));
    let tvl = tvl_with(
        Arc::new(StubAmounts::constant(3 * 10u128.pow(18) / 2)),
        prices.clone(),
    );
    let points = tvl
        .token_tvl_chart(&chart(fixtures::hop_eth(), TvlChartRange::D30))
        .await
        .unwrap();

    assert!(points.iter().all(|p| p.amount == dec("1.5")));
    assert!(points.iter().all(|p| p.usd_value == dec("3000.00")));
    let seen = prices.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].price_id, "ethereum");
}

#[tokio::test]
async fn mock_providers_value_each_point() {
    let tvl = tvl_with(
        Arc::new(MockAmountProvider::new()),
        Arc::new(MockPriceProvider::new()),
    );
    let points = tvl
        .token_tvl_chart(&chart(fixtures::hop_eth(), TvlChartRange::D7))
        .await
        .unwrap();

    for p in &points {
        let price = MockPriceProvider::price("ethereum", p.timestamp).unwrap();
        assert_eq!(p.usd_value, p.amount * price, "at {}", p.timestamp);
    }
}
