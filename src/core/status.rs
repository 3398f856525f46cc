//! Status codes for bounded calls.
//!
//! The C ABI returns these values directly and the CLI uses them as its
//! process exit code, so the discriminants are part of the public contract.

use serde::Serialize;

/// Outcome code of a bounded call.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The call succeeded and the output slot holds the result.
    Ok = 0,
    /// An operand was rejected.
    InvalidInput = 1,
    /// The output buffer was too small.
    InsufficientCapacity = 2,
}

impl Status {
    /// Returns the numeric code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns true for [`Status::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Collapses a bounded result into its status code.
    #[must_use]
    pub const fn of<T>(result: &Result<T, crate::error::BoundedError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(err) => err.status(),
        }
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> Self {
        status.code()
    }
}
