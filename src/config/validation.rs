//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and address formats
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - RPC and database URIs are not checked here: bad database URIs are dropped
//!   during resolution, bad RPC URLs fail their own attempt
//! - A malformed token contract only warns; balance reads report unavailable

use std::fmt;
use std::net::SocketAddr;

use alloy::primitives::Address;

use crate::config::schema::ConnectorConfig;

/// Largest decimal count whose scale factor fits in a `U256`.
const MAX_TOKEN_DECIMALS: u8 = 77;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a loaded configuration.
pub fn validate_config(config: &ConnectorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.rpc.token_contract.parse::<Address>() {
        tracing::warn!(
            token_contract = %config.rpc.token_contract,
            error = %e,
            "rpc.token_contract is not a valid address"
        );
    }

    if config.rpc.chain_id == 0 {
        errors.push(ValidationError {
            field: "rpc.chain_id",
            message: "must be non-zero".to_string(),
        });
    }

    if config.rpc.token_decimals > MAX_TOKEN_DECIMALS {
        errors.push(ValidationError {
            field: "rpc.token_decimals",
            message: format!("must be at most {}", MAX_TOKEN_DECIMALS),
        });
    }

    if config.rpc.request_timeout_secs == Some(0) {
        errors.push(ValidationError {
            field: "rpc.request_timeout_secs",
            message: "must be greater than zero when set".to_string(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError {
            field: "observability.metrics_address",
            message: format!("invalid socket address '{}'", config.observability.metrics_address),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
