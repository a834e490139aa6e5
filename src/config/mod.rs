//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (MONGO_URI, RPC_URL, USDC_CONTRACT_ADDRESS)
//!     → validation.rs (semantic checks)
//!     → ConnectorConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Environment is read once, at load time
//! - All fields have defaults so an empty file (or no file) is a valid config
//! - Validation returns every problem, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env_overrides, from_env, load_config, ConfigError};
pub use schema::{ConnectorConfig, DatabaseConfig, LogFormat, ObservabilityConfig, RpcConfig};
pub use validation::{validate_config, ValidationError};
