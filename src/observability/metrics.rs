//! Metrics collection and exposition.
//!
//! # Metrics
//! - `fallback_attempts_total` (counter): attempts by target, result
//! - `fallback_exhausted_total` (counter): passes that ended without a success, by target
//! - `database_connected` (gauge): 1=connected, 0=not connected
//!
//! # Design Decisions
//! - Recording is always safe; without an installed recorder it is a no-op
//! - Prometheus exposition is opt-in through configuration

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder with an HTTP scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record the outcome of one candidate attempt.
pub fn record_attempt(target: &'static str, success: bool) {
    let result = if success { "success" } else { "failure" };
    ::metrics::counter!("fallback_attempts_total", "target" => target, "result" => result).increment(1);
}

/// Record a pass that ended without a success.
pub fn record_exhausted(target: &'static str) {
    ::metrics::counter!("fallback_exhausted_total", "target" => target).increment(1);
}

/// Record database readiness after a connect pass.
pub fn record_database_connected(connected: bool) {
    ::metrics::gauge!("database_connected").set(if connected { 1.0 } else { 0.0 });
}
