use std::sync::Arc;

use tvl::{TokenTvlChartParams, Tvl};
use tvl_mock::{MockAmountProvider, MockPriceProvider, fixtures};

const REQUEST: &str = r#"{
    "token": {
        "projectId": "paradex",
        "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
        "chain": "ethereum"
    },
    "range": "30d"
}"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tvl = Tvl::builder()
        .catalog(Arc::new(fixtures::catalog()))
        .amount_provider(Arc::new(MockAmountProvider::new()))
        .price_provider(Arc::new(MockPriceProvider::new()))
        .build()?;

    let req: TokenTvlChartParams = serde_json::from_str(REQUEST)?;
    let chart = tvl.token_tvl_chart(&req).await?;

    println!(
        "{} over {} ({:?}): {} points",
        req.token,
        req.range,
        req.range.resolution(),
        chart.len()
    );
    for p in chart.iter().rev().take(4) {
        println!("  {}  {:>14}  ${:>14}", p.timestamp, p.amount, p.usd_value);
    }
    println!("{}", serde_json::to_string(&chart[chart.len().saturating_sub(2)..])?);

    Ok(())
}
