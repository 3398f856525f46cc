//! Error types for adder operations.
//!
//! Bounded calls report failures as [`BoundedError`]; the CLI layer adds
//! [`CommandError`]. Both convert into the crate-wide [`Error`].

use crate::core::Status;
use thiserror::Error;

/// Result type alias for adder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// A bounded call rejected its input or ran out of room.
    #[error(transparent)]
    Bounded(#[from] BoundedError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

impl Error {
    /// Returns the status code reported for this error.
    ///
    /// Command errors have no bounded-call counterpart and map to
    /// [`Status::InvalidInput`].
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Bounded(err) => err.status(),
            Self::Command(_) => Status::InvalidInput,
        }
    }
}

/// Failures of a bounded call.
///
/// On either variant the output slot holds its sentinel: `0` for sums, an
/// empty string for text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundedError {
    /// An operand was rejected.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: String,
    },

    /// The output needs more room than the buffer declares.
    #[error("insufficient capacity: need {required} bytes, have {capacity}")]
    InsufficientCapacity {
        /// Bytes needed, terminator included.
        required: usize,
        /// Declared capacity of the buffer.
        capacity: usize,
    },
}

impl BoundedError {
    /// Builds an [`BoundedError::InvalidInput`] from any message.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Maps the error onto its status code.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::InvalidInput { .. } => Status::InvalidInput,
            Self::InsufficientCapacity { .. } => Status::InsufficientCapacity,
        }
    }
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
