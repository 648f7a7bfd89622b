use std::collections::BTreeMap;

use crate::{
    AmountConfig, ChainId, PriceConfig, Project, ProjectId, TokenAddress, TokenInfo, TokenParams,
    TvlError,
};

/// Amount and price configurations derived from one project's escrows.
///
/// Configs are grouped per logical token `(chain, address)`. Within a group
/// they are ordered by ascending `since_timestamp`, and all of them share
/// `decimals` and `price_id`; both properties are checked on construction so
/// that the first config of a group can stand in for the whole group.
#[derive(Debug, Clone)]
pub struct ConfigMapping {
    project: ProjectId,
    amounts: BTreeMap<(ChainId, TokenAddress), Vec<AmountConfig>>,
}

impl ConfigMapping {
    /// Derive the mapping for `project`, resolving escrow symbols against `tokens`.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if an escrow lists a symbol that is not in the
    /// registry for its chain, or if configs of one token disagree on
    /// `decimals` or `price_id`.
    pub fn new(project: &Project, tokens: &[TokenInfo]) -> Result<Self, TvlError> {
        let mut amounts: BTreeMap<(ChainId, TokenAddress), Vec<AmountConfig>> = BTreeMap::new();

        for escrow in &project.escrows {
            for symbol in &escrow.tokens {
                let info = tokens
                    .iter()
                    .find(|t| &t.symbol == symbol && t.chain == escrow.chain)
                    .ok_or_else(|| {
                        TvlError::InvalidConfig(format!(
                            "escrow {} of {} lists unknown token {} on {}",
                            escrow.address, project.id, symbol, escrow.chain
                        ))
                    })?;
                let config = AmountConfig {
                    id: format!(
                        "{}-{}-{}-{}",
                        project.id, escrow.chain, escrow.address, info.symbol
                    ),
                    project: project.id.clone(),
                    chain: escrow.chain.clone(),
                    escrow: escrow.address.clone(),
                    address: info.address.clone(),
                    symbol: info.symbol.clone(),
                    decimals: info.decimals,
                    since_timestamp: escrow.since_timestamp.max(info.since_timestamp),
                    price_id: info.price_id.clone(),
                    source: escrow.source,
                };
                amounts
                    .entry((escrow.chain.clone(), info.address.clone()))
                    .or_default()
                    .push(config);
            }
        }

        for ((chain, address), configs) in &mut amounts {
            configs.sort_by_key(|c| c.since_timestamp);
            let first = &configs[0];
            if let Some(odd) = configs
                .iter()
                .find(|c| c.decimals != first.decimals || c.price_id != first.price_id)
            {
                return Err(TvlError::InvalidConfig(format!(
                    "token {address} on {chain} has inconsistent configs: {} ({} decimals, price {}) vs {} ({} decimals, price {})",
                    first.id, first.decimals, first.price_id, odd.id, odd.decimals, odd.price_id
                )));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            project = %project.id,
            tokens = amounts.len(),
            "built config mapping"
        );

        Ok(Self {
            project: project.id.clone(),
            amounts,
        })
    }

    /// Amount configs of `token` held by `project`, earliest first; empty if none.
    #[must_use]
    pub fn amounts_by_project_and_token(
        &self,
        project: &ProjectId,
        token: &TokenParams,
    ) -> Vec<AmountConfig> {
        if project != &self.project {
            return Vec::new();
        }
        self.amounts
            .get(&(token.chain.clone(), token.address.clone()))
            .cloned()
            .unwrap_or_default()
    }

    /// Price feed configuration paired with an amount config.
    #[must_use]
    pub fn price_config_from_amount_config(&self, config: &AmountConfig) -> PriceConfig {
        PriceConfig {
            price_id: config.price_id.clone(),
            since_timestamp: config.since_timestamp,
        }
    }

    /// Every amount config of the project, grouped by token.
    pub fn all_amounts(&self) -> impl Iterator<Item = &AmountConfig> {
        self.amounts.values().flatten()
    }
}
