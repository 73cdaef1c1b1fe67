//! Error type shared by every ladder operation.

use thiserror::Error;

/// Failures raised when a ladder invariant or argument contract is violated.
///
/// Nothing here is retried: each variant points at a caller bug or bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// A structural or count invariant was violated.
    #[error("{0}")]
    InvalidArgument(String),

    /// An index-style accessor was given an index outside `[0, size)`.
    #[error("index out of range: index {index}, size {size}")]
    OutOfRange { index: i64, size: usize },
}

impl LadderError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    pub fn out_of_range(index: i64, size: usize) -> Self {
        Self::OutOfRange { index, size }
    }
}

pub type Result<T> = std::result::Result<T, LadderError>;
