//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::endpoint::{embedded_database_uri, PUBLIC_RPC_FALLBACKS};

/// Polygon mainnet chain ID.
pub const POLYGON_CHAIN_ID: u64 = 137;

/// Bridged USDC on Polygon mainnet.
pub const POLYGON_USDC_CONTRACT: &str = "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174";

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Document database candidates.
    pub database: DatabaseConfig,

    /// Blockchain RPC candidates and token contract.
    pub rpc: RpcConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Database connection sources.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// base64-encoded default URI, tried first.
    pub embedded_uri: String,

    /// Override URI, tried after the embedded one (`MONGO_URI`).
    pub uri_override: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            embedded_uri: embedded_database_uri().to_string(),
            uri_override: None,
        }
    }
}

// Connection strings carry credentials
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("embedded_uri", &"<encoded>")
            .field("uri_override", &self.uri_override.as_ref().map(|_| "<set>"))
            .finish()
    }
}

/// RPC endpoint and token contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Primary JSON-RPC endpoint (`RPC_URL`).
    pub primary_url: Option<String>,

    /// Public endpoints tried after the primary, in order.
    pub fallback_urls: Vec<String>,

    /// Expected chain ID.
    pub chain_id: u64,

    /// Expected network name.
    pub network_name: String,

    /// ERC-20 token contract address (`USDC_CONTRACT_ADDRESS`).
    pub token_contract: String,

    /// Implied fractional digits of the token amount.
    pub token_decimals: u8,

    /// Per-attempt timeout applied by the RPC client, if any.
    pub request_timeout_secs: Option<u64>,

    /// Query the endpoint's chain ID before reading and fail the attempt on mismatch.
    pub verify_chain_id: bool,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            primary_url: None,
            fallback_urls: PUBLIC_RPC_FALLBACKS.iter().map(|url| url.to_string()).collect(),
            chain_id: POLYGON_CHAIN_ID,
            network_name: "matic".to_string(),
            token_contract: POLYGON_USDC_CONTRACT.to_string(),
            token_decimals: 6,
            request_timeout_secs: None,
            verify_chain_id: true,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConnectorConfig::default();
        assert_eq!(config.rpc.chain_id, 137);
        assert_eq!(config.rpc.network_name, "matic");
        assert_eq!(config.rpc.token_decimals, 6);
        assert_eq!(config.rpc.fallback_urls.len(), 3);
        assert!(config.rpc.primary_url.is_none());
        assert!(config.database.uri_override.is_none());
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ConnectorConfig = toml::from_str(
            r#"
            [rpc]
            primary_url = "https://rpc.example"
            request_timeout_secs = 5

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.rpc.primary_url.as_deref(), Some("https://rpc.example"));
        assert_eq!(config.rpc.request_timeout_secs, Some(5));
        assert_eq!(config.rpc.chain_id, 137);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_database_debug_hides_uris() {
        let config = DatabaseConfig {
            embedded_uri: "c2VjcmV0".to_string(),
            uri_override: Some("mongodb://u:p@h/".to_string()),
        };
        let shown = format!("{:?}", config);
        assert!(!shown.contains("c2VjcmV0"));
        assert!(!shown.contains("u:p"));
    }
}
