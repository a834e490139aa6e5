//! ERC-20 balance queries over alloy.
//!
//! # Responsibilities
//! - Build a transient JSON-RPC client for one endpoint
//! - Check the endpoint serves the expected chain (on unless disabled)
//! - Call `balanceOf` on the token contract
//! - Apply the configured per-attempt timeout

use std::future::Future;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::sol;
use tokio::time::timeout;

use crate::blockchain::types::{NetworkIdentity, RpcError, RpcResult};
use crate::config::RpcConfig;
use crate::endpoint::Endpoint;

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
    }
}

/// Reads a raw token balance through one RPC endpoint.
pub trait TokenBalanceSource: Send + Sync {
    /// Query `contract.balanceOf(owner)` on `endpoint`, expecting `network`.
    fn balance_of(
        &self,
        endpoint: &Endpoint,
        network: &NetworkIdentity,
        contract: Address,
        owner: Address,
    ) -> impl Future<Output = RpcResult<U256>> + Send;
}

/// [`TokenBalanceSource`] backed by an alloy HTTP provider per attempt.
///
/// An endpoint serving a different chain fails its attempt with
/// [`RpcError::ChainMismatch`] before the balance is read.
#[derive(Debug, Clone)]
pub struct AlloyBalanceSource {
    /// Per-attempt deadline. `None` leaves timing to the transport.
    request_timeout: Option<Duration>,
    /// Query `eth_chainId` before reading.
    verify_chain_id: bool,
}

impl Default for AlloyBalanceSource {
    fn default() -> Self {
        Self {
            request_timeout: None,
            verify_chain_id: true,
        }
    }
}

impl AlloyBalanceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RpcConfig) -> Self {
        Self {
            request_timeout: config.request_timeout_secs.map(Duration::from_secs),
            verify_chain_id: config.verify_chain_id,
        }
    }

    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = Some(request_timeout);
        self
    }

    pub fn with_chain_verification(mut self, verify: bool) -> Self {
        self.verify_chain_id = verify;
        self
    }

    async fn query(
        &self,
        endpoint: &Endpoint,
        network: &NetworkIdentity,
        contract: Address,
        owner: Address,
    ) -> RpcResult<U256> {
        let url: url::Url = endpoint.as_str().parse().map_err(|e: url::ParseError| {
            RpcError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            }
        })?;
        let provider = ProviderBuilder::new().connect_http(url);

        if self.verify_chain_id {
            let actual = provider
                .get_chain_id()
                .await
                .map_err(|e| RpcError::Transport(e.to_string()))?;
            if actual != network.chain_id.0 {
                return Err(RpcError::ChainMismatch {
                    expected: network.chain_id.0,
                    actual,
                });
            }
        }

        let token = IERC20::new(contract, provider);
        token
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| RpcError::Contract(e.to_string()))
    }
}

impl TokenBalanceSource for AlloyBalanceSource {
    async fn balance_of(
        &self,
        endpoint: &Endpoint,
        network: &NetworkIdentity,
        contract: Address,
        owner: Address,
    ) -> RpcResult<U256> {
        let attempt = self.query(endpoint, network, contract, owner);
        match self.request_timeout {
            Some(limit) => timeout(limit, attempt)
                .await
                .map_err(|_| RpcError::Timeout(limit))?,
            None => attempt.await,
        }
    }
}
