//! The one way a BLOOP run can fail.

use crate::ring::Accumulator;
use thiserror::Error;

/// The step ceiling was reached before the program ran off its end.
///
/// This is an expected outcome for non-terminating programs, not a bug in the
/// program or the interpreter. Whatever was printed before the ceiling is kept
/// in `output`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("step limit reached ({limit} steps)")]
pub struct StepLimitExceeded {
    /// The configured ceiling.
    pub limit: u64,
    /// Steps executed when the run stopped.
    pub steps: u64,
    /// Output produced so far.
    pub output: String,
    /// Accumulator at the moment the run stopped.
    pub accumulator: Accumulator,
}

pub type RunResult<T> = Result<T, StepLimitExceeded>;
