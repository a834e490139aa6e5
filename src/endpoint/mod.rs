//! Candidate endpoint resolution.
//!
//! # Data Flow
//! ```text
//! compiled-in / configured embedded value (base64)
//!     → encoding.rs (decode, local default on failure)
//!     → resolver.rs (order, drop invalid or empty entries)
//!     → Vec<Endpoint> (most preferred first)
//!     → fallback executor
//! ```
//!
//! # Design Decisions
//! - Resolution is a pure function of its inputs
//! - Invalid candidates are dropped, never reported as failures
//! - An empty list is a valid result meaning "nothing to try"
//! - Endpoints redact credentials whenever they are displayed

pub mod candidate;
pub mod encoding;
pub mod resolver;

pub use candidate::Endpoint;
pub use encoding::{decode_embedded, embedded_database_uri, LOCAL_DEFAULT_DATABASE_URI};
pub use resolver::{
    is_valid_database_uri, resolve_database_candidates, resolve_rpc_candidates,
    ACCEPTED_DATABASE_SCHEMES, PUBLIC_RPC_FALLBACKS,
};
