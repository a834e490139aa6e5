//! Chain-specific types and error definitions.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::config::schema::{RpcConfig, POLYGON_CHAIN_ID};

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// The network an RPC client is expected to talk to.
///
/// Fixed up front so clients never auto-detect the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkIdentity {
    pub chain_id: ChainId,
    pub name: String,
}

impl NetworkIdentity {
    pub fn new(chain_id: impl Into<ChainId>, name: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            name: name.into(),
        }
    }

    /// Polygon mainnet.
    pub fn polygon() -> Self {
        Self::new(POLYGON_CHAIN_ID, "matic")
    }

    pub fn from_config(config: &RpcConfig) -> Self {
        Self::new(config.chain_id, config.network_name.clone())
    }
}

impl Default for NetworkIdentity {
    fn default() -> Self {
        Self::polygon()
    }
}

impl fmt::Display for NetworkIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.chain_id.0)
    }
}

/// Errors from a single RPC attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RpcError {
    /// Endpoint string is not a usable URL.
    #[error("Invalid RPC endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Transport(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0:?}")]
    Timeout(Duration),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// The contract call reverted or returned undecodable data.
    #[error("Contract call failed: {0}")]
    Contract(String),

    /// Address string could not be parsed.
    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    /// Raw amount could not be scaled to a decimal.
    #[error("Unit conversion failed: {0}")]
    Units(String),
}

/// Result type for RPC operations.
pub type RpcResult<T> = Result<T, RpcError>;

/// Outcome of a balance read that always completes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenBalance {
    /// Balance read from an endpoint.
    Known(f64),
    /// Every endpoint failed; the balance is unknown.
    Unavailable,
}

impl TokenBalance {
    /// Numeric value, with `0.0` standing in for [`TokenBalance::Unavailable`].
    pub fn value(&self) -> f64 {
        match self {
            TokenBalance::Known(amount) => *amount,
            TokenBalance::Unavailable => 0.0,
        }
    }

    /// False for the sentinel, even though its value is zero.
    pub fn is_known(&self) -> bool {
        matches!(self, TokenBalance::Known(_))
    }

    pub fn known(&self) -> Option<f64> {
        match self {
            TokenBalance::Known(amount) => Some(*amount),
            TokenBalance::Unavailable => None,
        }
    }
}

impl fmt::Display for TokenBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenBalance::Known(amount) => write!(f, "{}", amount),
            TokenBalance::Unavailable => f.write_str("unavailable"),
        }
    }
}
