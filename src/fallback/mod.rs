//! Sequential multi-endpoint fallback.
//!
//! # State Machine
//! ```text
//! Pending([])             → Done(NoCandidates)
//! Pending([head, ..tail]) → attempt(head)
//!     Ok(value)                  → Done(Succeeded)
//!     Err(cause), Continue, tail → Pending(tail)
//!     Err(cause), Continue, []   → Done(Failed, Exhausted)
//!     Err(cause), Stop           → Done(Failed, Terminal)
//! ```
//!
//! # Design Decisions
//! - One loop shared by every instantiation; callers plug in a classifier
//! - Strictly sequential: the next candidate starts only after the previous outcome is known
//! - No timeouts, retries or state across passes (collaborators own timeouts)

pub mod executor;
pub mod outcome;

pub use executor::{continue_on_any, run_fallback, Disposition};
pub use outcome::{FallbackFailure, FallbackOutcome, StopReason};
