//! Engine error types
//!
//! Only fatal, session-ending conditions are errors. Rejected swap
//! proposals are ordinary [`SwapRejection`](gem_crush_types::SwapRejection)
//! values returned by `propose_swap`.

use gem_crush_core::GenerateError;
use thiserror::Error;

/// Fatal engine failures
///
/// A correct engine never produces `InvariantViolation` at runtime; it
/// exists as a defect signal so a broken resolver or generator fails
/// loudly instead of handing the host an unstable board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("board generation failed: {0}")]
    Generation(#[from] GenerateError),

    #[error("rejected host-supplied grid: {reason}")]
    UnstableGrid { reason: &'static str },

    #[error("engine invariant violated: {detail}")]
    InvariantViolation { detail: &'static str },
}
