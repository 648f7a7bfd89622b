use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::UnixTime;

/// Unified error type for the l2tvl workspace.
///
/// Covers unknown references (project, token), upstream data gaps, argument and
/// configuration validation, arithmetic issues and provider-tagged failures.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TvlError {
    /// A project or token could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "project paradex".
        what: String,
    },

    /// A timestamp of the requested grid has no amount or no price.
    #[error("missing data point at {timestamp}: {what}")]
    MissingDataPoint {
        /// Grid timestamp that could not be resolved.
        timestamp: UnixTime,
        /// Which series lacked the value ("amount", "price" or both).
        what: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The static project configuration violates a precondition.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Issues with the returned or computed data (overflow, unrepresentable values).
    #[error("data issue: {0}")]
    Data(String),

    /// An upstream provider returned an error.
    #[error("{provider} failed: {msg}")]
    Provider {
        /// Provider name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },
}

impl TvlError {
    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `MissingDataPoint` error for a grid timestamp.
    pub fn missing_data_point(timestamp: UnixTime, what: impl Into<String>) -> Self {
        Self::MissingDataPoint {
            timestamp,
            what: what.into(),
        }
    }

    /// Helper: build a `Provider` error with the provider name and message.
    pub fn provider(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Returns true if the error was caused by the caller's input rather than upstream state.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InvalidArg(_))
    }
}
