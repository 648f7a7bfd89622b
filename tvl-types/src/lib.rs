//! Token TVL data transfer objects and configuration primitives shared across the workspace.
#![warn(missing_docs)]

mod config;
mod error;
mod point;
mod project;
mod range;
mod time;
mod token;

pub use config::{AmountConfig, CacheConfig, CachePolicy, PriceConfig, TvlConfig};
pub use error::TvlError;
pub use point::TvlPoint;
pub use project::{Escrow, EscrowSource, Project, ProjectDisplay, ProjectKind, TokenInfo};
pub use range::{TimeRange, TvlChartRange, TvlChartResolution};
pub use time::{TimeUnit, UnixTime};
pub use token::{
    ChainId, EthereumAddress, ProjectId, TokenAddress, TokenParams, TokenTvlChartParams,
};
