use tvl_core::{StaticCatalog, TokenAddress, TokenParams};

const CATALOG_JSON: &str = include_str!("catalog.json");

/// Identifier of the Paradex layer 2 fixture.
pub const PARADEX: &str = "paradex";
/// Identifier of the Hop bridge fixture.
pub const HOP: &str = "hop";
/// USDC contract on Ethereum.
pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
/// Paradex USDC escrow on Ethereum.
pub const PARADEX_USDC_ESCROW: &str = "0xe3cbe3a636ab6a754e9e41b12b09d09ce9e53db3";
/// First timestamp of the Paradex USDC escrow (2023-10-06T00:00:00Z).
pub const PARADEX_USDC_SINCE: i64 = 1_696_550_400;

/// Hop USDC escrows on Ethereum, earliest first.
pub const HOP_USDC_ESCROWS: [&str; 2] = [
    "0x3666f603cc164936c1b87e207f36beba4ac5f18a",
    "0x22b1cbb8d98a01a3b71d034bb899775a76eb1cc2",
];
/// First timestamp of the earlier Hop USDC escrow (2021-07-01T00:00:00Z).
pub const HOP_USDC_SINCE: i64 = 1_625_097_600;
/// First timestamp of the later Hop USDC escrow (2022-05-01T00:00:00Z).
pub const HOP_USDC_SECOND_SINCE: i64 = 1_651_363_200;

/// Fixture catalog with Paradex and Hop.
///
/// # Panics
/// Panics if the bundled fixture JSON is malformed.
#[must_use]
pub fn catalog() -> StaticCatalog {
    StaticCatalog::from_json(CATALOG_JSON).expect("bundled catalog fixture is valid")
}

/// USDC held by Paradex on Ethereum.
#[must_use]
pub fn paradex_usdc() -> TokenParams {
    TokenParams::new(PARADEX, usdc_address(), "ethereum")
}

/// Native ETH held by Hop on Ethereum.
#[must_use]
pub fn hop_eth() -> TokenParams {
    TokenParams::new(HOP, TokenAddress::Native, "ethereum")
}

/// USDC held by Hop on Ethereum.
#[must_use]
pub fn hop_usdc() -> TokenParams {
    TokenParams::new(HOP, usdc_address(), "ethereum")
}

fn usdc_address() -> TokenAddress {
    USDC.parse().expect("USDC fixture address is valid")
}
