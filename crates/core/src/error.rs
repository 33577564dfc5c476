//! Error model for the query operators.

use thiserror::Error;

/// Result type returned by every fallible sequence operation.
pub type QueryResult<T> = Result<T, QueryError>;

/// Argument-validation failure reported by a sequence operation.
///
/// Every operation is stateless, so an error never leaves anything behind that
/// needs cleaning up; the caller just gets told what was wrong with the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// An extremum was requested from a sequence with no elements.
    #[error("sequence contains no elements")]
    EmptySequence,

    /// An argument was outside the domain the operation accepts (e.g. chunk size 0).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An index or range did not fit inside the sequence.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: String, len: usize },
}

impl QueryError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn out_of_range(index: impl core::fmt::Display, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: index.to_string(),
            len,
        }
    }

    pub fn empty() -> Self {
        Self::EmptySequence
    }
}
