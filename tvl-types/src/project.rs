//! Static project catalog records.

use serde::{Deserialize, Serialize};

use crate::{ChainId, EthereumAddress, ProjectId, TokenAddress, UnixTime};

/// Category of a tracked project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Rollup or validium settling on Ethereum.
    Layer2,
    /// Chain settling on a layer 2.
    Layer3,
    /// Token bridge.
    Bridge,
}

/// Human-facing description of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDisplay {
    /// Display name, e.g. "Paradex".
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Category label, e.g. "ZK Rollup".
    pub category: String,
    /// Stack provider, e.g. "Starknet".
    #[serde(default)]
    pub provider: Option<String>,
    /// One-paragraph description.
    #[serde(default)]
    pub description: String,
}

/// How tokens locked in an escrow relate to the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscrowSource {
    /// Locked through the project's canonical bridge.
    #[default]
    Canonical,
    /// Locked through a third-party bridge.
    External,
    /// Minted natively on the project.
    Native,
}

/// A contract holding tokens on behalf of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Escrow {
    /// Escrow contract address.
    pub address: EthereumAddress,
    /// Chain the escrow is deployed on.
    pub chain: ChainId,
    /// First timestamp the escrow holds funds.
    pub since_timestamp: UnixTime,
    /// Symbols of the tracked tokens, resolved through the token registry.
    pub tokens: Vec<String>,
    /// Bridge relationship.
    #[serde(default)]
    pub source: EscrowSource,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A tracked project with its escrows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier.
    pub id: ProjectId,
    /// Project category.
    pub kind: ProjectKind,
    /// Listing time in the catalog.
    pub created_at: UnixTime,
    /// Display metadata.
    pub display: ProjectDisplay,
    /// Escrows whose balances make up the project's TVL.
    #[serde(default)]
    pub escrows: Vec<Escrow>,
}

/// Registry entry describing a fungible asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Ticker, e.g. "USDC".
    pub symbol: String,
    /// Chain the token lives on.
    pub chain: ChainId,
    /// Contract address or `native`.
    pub address: TokenAddress,
    /// Fixed-point scale of raw amounts.
    pub decimals: u8,
    /// First timestamp the token exists.
    pub since_timestamp: UnixTime,
    /// Identifier of the price feed.
    pub price_id: String,
}
