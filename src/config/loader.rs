//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ConnectorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Database URI override.
pub const DATABASE_URI_ENV_VAR: &str = "MONGO_URI";
/// Primary RPC endpoint.
pub const RPC_URL_ENV_VAR: &str = "RPC_URL";
/// Token contract address.
pub const TOKEN_CONTRACT_ENV_VAR: &str = "USDC_CONTRACT_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load a TOML file, apply environment overrides and validate.
pub fn load_config(path: &Path) -> Result<ConnectorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: ConnectorConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Defaults plus environment overrides, validated.
pub fn from_env() -> Result<ConnectorConfig, ConfigError> {
    let mut config = ConnectorConfig::default();

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment-sourced values onto `config`.
///
/// Empty values are treated as unset.
pub fn apply_env_overrides<F>(config: &mut ConnectorConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(uri) = get(DATABASE_URI_ENV_VAR) {
        config.database.uri_override = Some(uri);
    }
    if let Some(url) = get(RPC_URL_ENV_VAR) {
        config.rpc.primary_url = Some(url);
    }
    if let Some(address) = get(TOKEN_CONTRACT_ENV_VAR) {
        config.rpc.token_contract = address;
    }
}
