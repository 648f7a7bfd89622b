//! Identifiers for projects, chains and tokens, plus the chart request shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{TvlChartRange, TvlError};

/// Identifier of a tracked project, e.g. `paradex`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Wrap a project identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of the chain a token lives on, e.g. `ethereum`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(String);

impl ChainId {
    /// Wrap a chain name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the chain name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChainId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 20-byte EVM address, stored in lowercase `0x`-prefixed hex.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EthereumAddress(String);

impl EthereumAddress {
    /// Borrow the normalized hex form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EthereumAddress {
    type Err = TvlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| TvlError::InvalidArg(format!("address must start with 0x: {s}")))?;
        if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TvlError::InvalidArg(format!(
                "address must be 40 hex digits: {s}"
            )));
        }
        Ok(Self(format!("0x{}", hex.to_ascii_lowercase())))
    }
}

impl TryFrom<String> for EthereumAddress {
    type Error = TvlError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<EthereumAddress> for String {
    fn from(a: EthereumAddress) -> Self {
        a.0
    }
}

impl fmt::Display for EthereumAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Location of a fungible asset on its chain: a contract address or the chain's native coin.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TokenAddress {
    /// The chain's native asset (e.g. ETH on Ethereum).
    Native,
    /// A token contract.
    Contract(EthereumAddress),
}

impl FromStr for TokenAddress {
    type Err = TvlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "native" {
            Ok(Self::Native)
        } else {
            s.parse().map(Self::Contract)
        }
    }
}

impl TryFrom<String> for TokenAddress {
    type Error = TvlError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TokenAddress> for String {
    fn from(a: TokenAddress) -> Self {
        a.to_string()
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::Contract(a) => a.fmt(f),
        }
    }
}

/// A specific asset held by a specific project on a specific chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenParams {
    /// Owning project.
    pub project_id: ProjectId,
    /// Token contract address or `native`.
    pub address: TokenAddress,
    /// Chain the asset is held on.
    pub chain: ChainId,
}

impl TokenParams {
    /// Convenience constructor.
    pub fn new(
        project_id: impl Into<String>,
        address: TokenAddress,
        chain: impl Into<String>,
    ) -> Self {
        Self {
            project_id: ProjectId::new(project_id),
            address,
            chain: ChainId::new(chain),
        }
    }
}

impl fmt::Display for TokenParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}@{}", self.project_id, self.address, self.chain)
    }
}

/// Input of a token TVL chart request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenTvlChartParams {
    /// Token to chart.
    pub token: TokenParams,
    /// Display window.
    pub range: TvlChartRange,
}

impl TokenTvlChartParams {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(token: TokenParams, range: TvlChartRange) -> Self {
        Self { token, range }
    }
}
