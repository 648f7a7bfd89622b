//! tvl-core
//!
//! Core types, traits, and utilities shared across the l2tvl workspace.
//!
//! - `connector`: role traits for the project catalog and the upstream
//!   amount and price providers.
//! - `catalog`: a static, queryable catalog of projects and tokens.
//! - `mapping`: derives amount and price configurations from a project.
//! - `timeseries`: range clamping and timestamp grid generation.
//! - `value`: fixed-point scaling and USD value calculation.
//!
//! Providers are async (`async-trait`) and are expected to run under a Tokio
//! 1.x runtime.
#![warn(missing_docs)]

/// In-memory project catalog.
pub mod catalog;
/// Catalog and provider role traits.
pub mod connector;
/// Project-derived amount and price configurations.
pub mod mapping;
/// Range adjustment and timestamp grids.
pub mod timeseries;
/// Fixed-point and USD value arithmetic.
pub mod value;

pub use catalog::StaticCatalog;
pub use connector::{AmountProvider, PriceProvider, ProjectCatalog};
pub use mapping::ConfigMapping;
pub use timeseries::grid::generate_timestamps;
pub use timeseries::range::{adjusted_range, range_with_max, target_timestamp};
pub use value::{as_decimal, calculate_value};

pub use tvl_types::*;
