//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! fallback executor, connectors:
//!     → logging.rs (structured tracing events, endpoints redacted)
//!     → metrics.rs (attempt counters, exhaustion counters, readiness gauge)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Connection strings are only ever logged through `Endpoint`'s redacting `Display`
//! - Metrics are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
