//! Document database connectivity.
//!
//! # Data Flow
//! ```text
//! DatabaseConfig (embedded URI, MONGO_URI override)
//!     → endpoint::resolve_database_candidates
//!     → connector.rs (fallback pass, SRV-lookup-only continuation)
//!     → driver.rs (host-provided DatabaseDriver)
//!     → is_connected() reads the driver's ready state
//! ```
//!
//! # Design Decisions
//! - Connecting never fails the caller; the process keeps running without a database
//! - Readiness is owned by the driver and never mirrored here
//! - Only an SRV lookup refusal moves on to the next URI; anything else ends the pass

pub mod connector;
pub mod driver;

pub use connector::{srv_lookup_only, DatabaseConnector};
pub use driver::{DatabaseDriver, DriverError, DriverResult, ReadyState};
