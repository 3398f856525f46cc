//! Pair of operands.
//!
//! A `Pair` is built by the caller and consumed by a sum; it has no
//! lifecycle beyond that call.

use serde::{Deserialize, Serialize};

/// Two integer operands.
///
/// The layout is `#[repr(C)]` so the same type is accepted by the C ABI.
///
/// # Examples
///
/// ```
/// use adder::core::Pair;
///
/// let pair = Pair::new(3, 4);
/// assert_eq!(pair.sum(), 7);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pair {
    /// Left operand.
    pub x: i32,
    /// Right operand.
    pub y: i32,
}

impl Pair {
    /// Creates a pair from two operands.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the wrapping sum of both fields.
    #[must_use]
    pub const fn sum(&self) -> i32 {
        self.x.wrapping_add(self.y)
    }

    /// Returns the sum if both fields are non-negative and it fits in an
    /// `i32`.
    #[must_use]
    pub const fn checked_sum(&self) -> Option<i32> {
        if self.x < 0 || self.y < 0 {
            return None;
        }
        self.x.checked_add(self.y)
    }

    /// Returns the first negative field, if any.
    #[must_use]
    pub const fn negative_operand(&self) -> Option<i32> {
        if self.x < 0 {
            Some(self.x)
        } else if self.y < 0 {
            Some(self.y)
        } else {
            None
        }
    }
}

impl From<(i32, i32)> for Pair {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
