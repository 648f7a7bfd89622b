//! Tvl computes token TVL charts for tracked scaling projects.
//!
//! Overview
//! - Resolves a token of a project through a `ProjectCatalog` and derives its
//!   amount and price configurations.
//! - Clamps the requested range to the token's tracking start and a
//!   freshness target, then walks a grid at the range's resolution.
//! - Fetches amounts and prices concurrently and values each point in USD
//!   with exact fixed-point arithmetic.
//! - Memoizes finished charts per request for one hour by default.
//!
//! Key behaviors
//! - Every grid timestamp must have both an amount and a price; a gap is an
//!   error (`MissingDataPoint`), never an interpolated point.
//! - Unknown projects and tokens fail with `NotFound` before any provider is
//!   contacted.
//! - A request whose clamped range is empty yields an empty chart.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use tvl::{Tvl, TokenParams, TokenTvlChartParams, TvlChartRange};
//!
//! let tvl = Tvl::builder()
//!     .catalog(Arc::new(catalog))
//!     .amount_provider(Arc::new(amounts))
//!     .price_provider(Arc::new(prices))
//!     .build()?;
//!
//! let token = TokenParams::new("paradex", usdc_address, "ethereum");
//! let chart = tvl
//!     .token_tvl_chart(&TokenTvlChartParams::new(token, TvlChartRange::D7))
//!     .await?;
//! for p in &chart {
//!     println!("{} {} {}", p.timestamp, p.amount, p.usd_value);
//! }
//! ```
#![warn(missing_docs)]

mod core;
mod router;

pub use crate::core::{Clock, FixedClock, SystemClock, Tvl, TvlBuilder};
pub use tvl_core::*;
pub use tvl_middleware::{CacheKey, ChartCache, NoopChartCache, TtlChartCache};
