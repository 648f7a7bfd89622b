//! Run with `cargo run -p tvl --example 00_tracing --features tracing`.
use std::sync::Arc;

use tracing_subscriber::fmt::format::FmtSpan;
use tvl::{Tvl, TokenTvlChartParams, TvlChartRange};
use tvl_mock::{MockAmountProvider, MockPriceProvider, fixtures};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,tvl=trace,tvl_middleware=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let tvl = Tvl::builder()
        .catalog(Arc::new(fixtures::catalog()))
        .amount_provider(Arc::new(MockAmountProvider::new()))
        .price_provider(Arc::new(MockPriceProvider::new()))
        .build()?;

    let req = TokenTvlChartParams::new(fixtures::paradex_usdc(), TvlChartRange::D7);
    // Miss, then hit.
    let _ = tvl.token_tvl_chart(&req).await?;
    let _ = tvl.token_tvl_chart(&req).await?;

    // Unknown project.
    let unknown = TokenTvlChartParams::new(
        tvl::TokenParams::new("unknown", tvl::TokenAddress::Native, "ethereum"),
        TvlChartRange::D7,
    );
    let _ = tvl.token_tvl_chart(&unknown).await;

    Ok(())
}
