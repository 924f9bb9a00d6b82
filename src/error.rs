//! Crate-wide error taxonomy.
//!
//! Only fatal, pre-solve failures are surfaced as [`Error`]. An instance
//! that turns out to be unsatisfiable is *not* an error: solvers report it
//! through the `feasible` flag and sentinel value of their result record,
//! so callers can still inspect partial state.

use thiserror::Error;

/// Fatal input errors raised before any algorithm runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Instance arrays disagree in shape.
    #[error("dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Which pair of inputs disagrees.
        what: &'static str,
        /// Length implied by the other inputs.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
