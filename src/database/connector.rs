//! Database connect with URI fallback.

use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::database::driver::{DatabaseDriver, DriverError, ReadyState};
use crate::endpoint::{resolve_database_candidates, Endpoint};
use crate::fallback::{run_fallback, Disposition, FallbackOutcome, StopReason};
use crate::observability::metrics;

const TARGET: &str = "database";

/// Continue only past SRV lookup refusals.
pub fn srv_lookup_only(cause: &DriverError) -> Disposition {
    if cause.is_srv_lookup_refused() {
        Disposition::Continue
    } else {
        Disposition::Stop
    }
}

/// Connects the shared database handle, trying each candidate URI in turn.
#[derive(Debug)]
pub struct DatabaseConnector<D> {
    driver: Arc<D>,
}

impl<D> Clone for DatabaseConnector<D> {
    fn clone(&self) -> Self {
        Self {
            driver: Arc::clone(&self.driver),
        }
    }
}

impl<D: DatabaseDriver> DatabaseConnector<D> {
    pub fn new(driver: Arc<D>) -> Self {
        Self { driver }
    }

    /// Run one fallback pass and return its outcome without reporting it.
    pub async fn try_connect(&self, candidates: &[Endpoint]) -> FallbackOutcome<(), DriverError> {
        run_fallback(
            TARGET,
            candidates,
            |endpoint| self.driver.connect(endpoint.as_str()),
            srv_lookup_only,
        )
        .await
    }

    /// Connect using the first workable candidate.
    ///
    /// Always completes. The result is observable through
    /// [`is_connected`](Self::is_connected) and the emitted log events.
    pub async fn connect(&self, candidates: &[Endpoint]) {
        match self.try_connect(candidates).await {
            FallbackOutcome::Succeeded { index, attempts, .. } => {
                tracing::info!(
                    endpoint = %candidates[index],
                    attempts = attempts,
                    "Database connected"
                );
            }
            FallbackOutcome::Failed(failure) => {
                metrics::record_exhausted(TARGET);
                let hint = match failure.reason() {
                    StopReason::Terminal => "terminal error",
                    StopReason::Exhausted => "no candidates left",
                };
                tracing::warn!(
                    error = %failure.last_cause(),
                    attempts = failure.attempts(),
                    stop = hint,
                    "Database connection failed, continuing without database"
                );
            }
            FallbackOutcome::NoCandidates => {
                metrics::record_exhausted(TARGET);
                tracing::warn!("Database skipped: no valid URI. Set MONGO_URI to connect");
            }
        }
        metrics::record_database_connected(self.is_connected());
    }

    /// Resolve candidates from configuration, then [`connect`](Self::connect).
    pub async fn connect_from_config(&self, config: &DatabaseConfig) {
        let candidates =
            resolve_database_candidates(&config.embedded_uri, config.uri_override.as_deref());
        self.connect(&candidates).await;
    }

    /// True only while the driver reports `Connected`.
    pub fn is_connected(&self) -> bool {
        self.driver.ready_state() == ReadyState::Connected
    }
}
