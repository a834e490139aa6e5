//! The sequential fallback loop.

use std::fmt;
use std::future::Future;

use crate::endpoint::Endpoint;
use crate::fallback::outcome::{FallbackFailure, FallbackOutcome, StopReason};
use crate::observability::metrics;

/// What a failed attempt means for the rest of the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Move on to the next candidate, if there is one.
    Continue,
    /// End the pass with this cause.
    Stop,
}

/// Classifier that treats every failure as continuable.
pub fn continue_on_any<E>(_cause: &E) -> Disposition {
    Disposition::Continue
}

/// Try `candidates` in order until one succeeds, the classifier stops the
/// pass, or the list runs out.
///
/// `target` labels log events and metrics (e.g. `"database"`, `"rpc"`).
/// Attempts never overlap. An empty list yields
/// [`FallbackOutcome::NoCandidates`] without calling `attempt`.
pub async fn run_fallback<'a, T, E, F, Fut, C>(
    target: &'static str,
    candidates: &'a [Endpoint],
    mut attempt: F,
    classify: C,
) -> FallbackOutcome<T, E>
where
    F: FnMut(&'a Endpoint) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Fn(&E) -> Disposition,
    E: fmt::Display,
{
    let mut earlier_causes = Vec::new();
    let mut remaining = candidates.iter().enumerate().peekable();

    while let Some((index, endpoint)) = remaining.next() {
        tracing::debug!(target_kind = target, candidate = index, endpoint = %endpoint, "Attempting candidate");

        let cause = match attempt(endpoint).await {
            Ok(value) => {
                metrics::record_attempt(target, true);
                return FallbackOutcome::Succeeded {
                    value,
                    index,
                    attempts: index + 1,
                };
            }
            Err(cause) => cause,
        };
        metrics::record_attempt(target, false);

        let disposition = classify(&cause);
        let has_next = remaining.peek().is_some();

        if disposition == Disposition::Continue && has_next {
            tracing::warn!(
                target_kind = target,
                candidate = index,
                endpoint = %endpoint,
                error = %cause,
                "Candidate failed, trying next"
            );
            earlier_causes.push(cause);
            continue;
        }

        let reason = match disposition {
            Disposition::Stop => StopReason::Terminal,
            Disposition::Continue => StopReason::Exhausted,
        };
        tracing::warn!(
            target_kind = target,
            candidate = index,
            endpoint = %endpoint,
            error = %cause,
            reason = %reason,
            "Candidate failed, ending fallback pass"
        );
        return FallbackOutcome::Failed(FallbackFailure::new(cause, earlier_causes, reason));
    }

    FallbackOutcome::NoCandidates
}
