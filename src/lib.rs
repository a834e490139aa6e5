//! Resilient connectivity over ordered candidate endpoints.
//!
//! A document database and a blockchain RPC endpoint are reached by trying
//! a prioritized list of candidates until one succeeds or all are exhausted.
//!
//! ```text
//! endpoint (resolve candidates) → fallback (sequential trial) → database | blockchain (report)
//! ```

// Core
pub mod endpoint;
pub mod fallback;

// Instantiations
pub mod blockchain;
pub mod database;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use blockchain::{AlloyBalanceSource, BalanceReader, TokenBalance};
pub use config::ConnectorConfig;
pub use database::{DatabaseConnector, DatabaseDriver};
pub use endpoint::Endpoint;
pub use fallback::{run_fallback, Disposition, FallbackOutcome};
