//! The database driver seam.

use std::future::Future;

use thiserror::Error;

/// Connection state as reported by the driver.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Disconnected = 0,
    Connected = 1,
    Connecting = 2,
    Disconnecting = 3,
}

impl From<u8> for ReadyState {
    fn from(val: u8) -> Self {
        match val {
            1 => ReadyState::Connected,
            2 => ReadyState::Connecting,
            3 => ReadyState::Disconnecting,
            _ => ReadyState::Disconnected,
        }
    }
}

/// Why the driver could not connect to one URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// DNS refused the SRV query used by `mongodb+srv://` URIs.
    #[error("SRV lookup refused for {host}")]
    SrvLookupRefused { host: String },

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("connection timed out: {0}")]
    Timeout(String),

    /// The URI passed scheme validation but the driver rejected it.
    #[error("invalid connection string: {0}")]
    InvalidUri(String),

    #[error("{0}")]
    Other(String),
}

impl DriverError {
    pub fn is_srv_lookup_refused(&self) -> bool {
        matches!(self, DriverError::SrvLookupRefused { .. })
    }
}

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;

/// A document database driver owning one process-wide connection.
///
/// Implementations wrap the real client; the connector only calls
/// `connect` and reads `ready_state`.
pub trait DatabaseDriver: Send + Sync {
    /// Establish the shared connection using `uri` and confirm it is usable.
    fn connect(&self, uri: &str) -> impl Future<Output = DriverResult<()>> + Send;

    /// Current state of the shared connection.
    fn ready_state(&self) -> ReadyState;
}
