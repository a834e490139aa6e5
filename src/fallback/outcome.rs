//! Final results of one fallback pass.

use std::fmt;

/// Why a pass ended without a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The classifier refused to move past a failure.
    Terminal,
    /// Every candidate was tried.
    Exhausted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Terminal => f.write_str("terminal failure"),
            StopReason::Exhausted => f.write_str("all candidates failed"),
        }
    }
}

/// Aggregated failure of a pass that attempted at least one candidate.
#[derive(Debug)]
pub struct FallbackFailure<E> {
    last_cause: E,
    earlier_causes: Vec<E>,
    reason: StopReason,
}

impl<E> FallbackFailure<E> {
    pub(crate) fn new(last_cause: E, earlier_causes: Vec<E>, reason: StopReason) -> Self {
        Self {
            last_cause,
            earlier_causes,
            reason,
        }
    }

    /// The cause observed on the final attempt.
    pub fn last_cause(&self) -> &E {
        &self.last_cause
    }

    /// Consume the failure, keeping only the final cause.
    pub fn into_last_cause(self) -> E {
        self.last_cause
    }

    /// Every cause in attempt order, the last one included.
    pub fn causes(&self) -> impl Iterator<Item = &E> {
        self.earlier_causes.iter().chain(std::iter::once(&self.last_cause))
    }

    /// Number of candidates attempted.
    pub fn attempts(&self) -> usize {
        self.earlier_causes.len() + 1
    }

    pub fn reason(&self) -> StopReason {
        self.reason
    }
}

impl<E: fmt::Display> fmt::Display for FallbackFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} after {} attempt(s): {}",
            self.reason,
            self.attempts(),
            self.last_cause
        )
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for FallbackFailure<E> {}

/// Result of driving the state machine to `Done`.
#[derive(Debug)]
pub enum FallbackOutcome<T, E> {
    /// A candidate succeeded.
    Succeeded {
        value: T,
        /// Position of the winning candidate in the list.
        index: usize,
        attempts: usize,
    },
    /// At least one candidate was attempted and none succeeded.
    Failed(FallbackFailure<E>),
    /// The list was empty; nothing was attempted.
    NoCandidates,
}

impl<T, E> FallbackOutcome<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, FallbackOutcome::Succeeded { .. })
    }

    /// Number of candidates the pass attempted.
    pub fn attempts(&self) -> usize {
        match self {
            FallbackOutcome::Succeeded { attempts, .. } => *attempts,
            FallbackOutcome::Failed(failure) => failure.attempts(),
            FallbackOutcome::NoCandidates => 0,
        }
    }

    /// The success value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            FallbackOutcome::Succeeded { value, .. } => Some(value),
            _ => None,
        }
    }
}
