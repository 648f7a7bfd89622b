use std::sync::Arc;

use tvl::{TokenTvlChartParams, Tvl, TvlChartRange};
use tvl_mock::{MockAmountProvider, MockPriceProvider, fixtures};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tvl = Tvl::builder()
        .catalog(Arc::new(fixtures::catalog()))
        .amount_provider(Arc::new(MockAmountProvider::new()))
        .price_provider(Arc::new(MockPriceProvider::new()))
        .build()?;

    let reqs: Vec<TokenTvlChartParams> = [
        fixtures::paradex_usdc(),
        fixtures::hop_eth(),
        fixtures::hop_usdc(),
    ]
    .into_iter()
    .flat_map(|token| {
        [TvlChartRange::D7, TvlChartRange::Max]
            .map(|range| TokenTvlChartParams::new(token.clone(), range))
    })
    .collect();

    for (req, res) in tvl.token_tvl_charts(&reqs).await {
        match res {
            Ok(points) => match points.last() {
                Some(last) => println!(
                    "{:<60} {:>5} {:>6} points, latest ${}",
                    req.token.to_string(),
                    req.range,
                    points.len(),
                    last.usd_value
                ),
                None => println!("{:<60} {:>5} no data", req.token.to_string(), req.range),
            },
            Err(e) => println!("{:<60} {:>5} error: {e}", req.token.to_string(), req.range),
        }
    }

    Ok(())
}
