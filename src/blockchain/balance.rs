//! Token balance reads with RPC endpoint fallback.

use alloy::primitives::utils::format_units;
use alloy::primitives::{Address, U256};

use crate::blockchain::client::TokenBalanceSource;
use crate::blockchain::types::{NetworkIdentity, RpcError, RpcResult, TokenBalance};
use crate::config::RpcConfig;
use crate::endpoint::{resolve_rpc_candidates, Endpoint};
use crate::fallback::{continue_on_any, run_fallback, FallbackOutcome};
use crate::observability::metrics;

const TARGET: &str = "rpc";

/// Implied fractional digits of the token (USDC).
pub const TOKEN_DECIMALS: u8 = 6;

/// Convert a raw fixed-point amount to a decimal value.
pub fn scale_units(raw: U256, decimals: u8) -> RpcResult<f64> {
    let formatted = format_units(raw, decimals).map_err(|e| RpcError::Units(e.to_string()))?;
    formatted
        .parse::<f64>()
        .map_err(|e| RpcError::Units(format!("'{}': {}", formatted, e)))
}

/// Reads one token's balance, trying every RPC candidate before giving up.
///
/// Every attempt failure is continuable. When all candidates fail the
/// reader returns [`TokenBalance::Unavailable`] instead of an error.
#[derive(Debug, Clone)]
pub struct BalanceReader<S> {
    source: S,
    candidates: Vec<Endpoint>,
    network: NetworkIdentity,
    /// An unparsable configured address fails every attempt.
    contract: RpcResult<Address>,
    decimals: u8,
}

impl<S: TokenBalanceSource> BalanceReader<S> {
    pub fn new(source: S, candidates: Vec<Endpoint>, network: NetworkIdentity, contract: Address) -> Self {
        Self {
            source,
            candidates,
            network,
            contract: Ok(contract),
            decimals: TOKEN_DECIMALS,
        }
    }

    /// Build from configuration: primary endpoint, then the fallback list.
    ///
    /// A malformed token contract does not fail construction; reads then
    /// report [`TokenBalance::Unavailable`].
    pub fn from_config(source: S, config: &RpcConfig) -> Self {
        let contract = config.token_contract.parse::<Address>().map_err(|e| {
            tracing::warn!(
                token_contract = %config.token_contract,
                error = %e,
                "Invalid token contract address, balance reads will be unavailable"
            );
            RpcError::InvalidAddress(config.token_contract.clone())
        });
        let candidates = resolve_rpc_candidates(config.primary_url.as_deref(), &config.fallback_urls);

        Self {
            source,
            candidates,
            network: NetworkIdentity::from_config(config),
            contract,
            decimals: config.token_decimals,
        }
    }

    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn candidates(&self) -> &[Endpoint] {
        &self.candidates
    }

    pub fn network(&self) -> &NetworkIdentity {
        &self.network
    }

    /// Run one fallback pass and return its outcome without reporting it.
    pub async fn try_balance_of(&self, owner: Address) -> FallbackOutcome<f64, RpcError> {
        run_fallback(
            TARGET,
            &self.candidates,
            |endpoint| async move {
                let contract = self.contract.clone()?;
                let raw = self
                    .source
                    .balance_of(endpoint, &self.network, contract, owner)
                    .await?;
                scale_units(raw, self.decimals)
            },
            continue_on_any,
        )
        .await
    }

    /// Balance of `owner`, or [`TokenBalance::Unavailable`] if no endpoint answered.
    pub async fn balance_of(&self, owner: Address) -> TokenBalance {
        match self.try_balance_of(owner).await {
            FallbackOutcome::Succeeded { value, .. } => TokenBalance::Known(value),
            FallbackOutcome::Failed(failure) => {
                metrics::record_exhausted(TARGET);
                tracing::error!(
                    owner = %owner,
                    error = %failure.last_cause(),
                    attempts = failure.attempts(),
                    "Error fetching balance, every RPC endpoint failed"
                );
                TokenBalance::Unavailable
            }
            FallbackOutcome::NoCandidates => {
                metrics::record_exhausted(TARGET);
                tracing::error!(owner = %owner, "Error fetching balance, no RPC endpoint configured");
                TokenBalance::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_units() {
        assert_eq!(scale_units(U256::from(1_234_567u64), 6).unwrap(), 1.234567);
        assert_eq!(scale_units(U256::ZERO, 6).unwrap(), 0.0);
        assert_eq!(scale_units(U256::from(5_000_000u64), 6).unwrap(), 5.0);
        assert_eq!(scale_units(U256::from(1u64), 6).unwrap(), 0.000001);
    }

    #[tokio::test]
    async fn test_bad_contract_degrades_to_unavailable() {
        let mut config = RpcConfig::default();
        config.token_contract = "0xnope".to_string();
        let reader = BalanceReader::from_config(crate::blockchain::AlloyBalanceSource::new(), &config);

        let FallbackOutcome::Failed(failure) = reader.try_balance_of(Address::ZERO).await else {
            panic!("expected failure");
        };
        assert_eq!(failure.attempts(), reader.candidates().len());
        assert_eq!(failure.last_cause(), &RpcError::InvalidAddress("0xnope".to_string()));

        assert_eq!(reader.balance_of(Address::ZERO).await, TokenBalance::Unavailable);
    }

    #[test]
    fn test_from_config_orders_candidates() {
        let mut config = RpcConfig::default();
        config.primary_url = Some("https://primary.example".to_string());

        let reader = BalanceReader::from_config(crate::blockchain::AlloyBalanceSource::new(), &config);
        assert_eq!(reader.candidates().len(), 4);
        assert_eq!(reader.candidates()[0].as_str(), "https://primary.example");
        assert_eq!(reader.network(), &NetworkIdentity::polygon());
    }
}
