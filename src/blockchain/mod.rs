//! Blockchain RPC subsystem.
//!
//! # Data Flow
//! ```text
//! RpcConfig (RPC_URL primary, public fallbacks, token contract)
//!     → endpoint::resolve_rpc_candidates
//!     → balance.rs (fallback pass, every failure continuable)
//!     → client.rs (transient alloy provider per attempt, balanceOf)
//!     → scale_units (6 implied decimals)
//!     → TokenBalance::Known | TokenBalance::Unavailable
//! ```
//!
//! # Design Decisions
//! - Balance reads never fail the caller; exhaustion yields a sentinel
//! - The sentinel is a distinct variant, so it cannot be mistaken for a real zero
//! - The expected network is fixed up front, never auto-detected
//! - Unlike the database path there is no terminal failure class

pub mod balance;
pub mod client;
pub mod types;

pub use balance::{scale_units, BalanceReader, TOKEN_DECIMALS};
pub use client::{AlloyBalanceSource, TokenBalanceSource};
pub use types::{ChainId, NetworkIdentity, RpcError, RpcResult, TokenBalance};
