//! Integer sums.
//!
//! [`add`] is total. The bounded forms reject negative operands and sums
//! that do not fit in an `i32`.

use crate::core::Pair;
use crate::error::BoundedError;

/// Sentinel stored by [`add_into`] on failure.
pub const SUM_SENTINEL: i32 = 0;

/// Adds two integers, wrapping on overflow.
///
/// # Examples
///
/// ```
/// assert_eq!(adder::add(2, 3), 5);
/// ```
#[must_use]
pub const fn add(x: i32, y: i32) -> i32 {
    x.wrapping_add(y)
}

/// Adds two non-negative integers.
///
/// # Errors
///
/// Returns [`BoundedError::InvalidInput`] if either operand is negative or
/// the sum overflows.
///
/// # Examples
///
/// ```
/// use adder::add_bounded;
///
/// assert_eq!(add_bounded(2, 3), Ok(5));
/// assert!(add_bounded(2, -3).is_err());
/// ```
pub fn add_bounded(x: i32, y: i32) -> Result<i32, BoundedError> {
    let pair = Pair::new(x, y);
    if let Some(operand) = pair.negative_operand() {
        tracing::debug!(x, y, "bounded add rejected negative operand");
        return Err(BoundedError::invalid_input(format!(
            "operand {operand} is negative"
        )));
    }
    pair.checked_sum().ok_or_else(|| {
        tracing::debug!(x, y, "bounded add overflowed");
        BoundedError::invalid_input(format!("{x} + {y} overflows i32"))
    })
}

/// Adds two non-negative integers into a caller-provided slot.
///
/// On failure `sum` is set to [`SUM_SENTINEL`].
///
/// # Errors
///
/// Same as [`add_bounded`].
pub fn add_into(x: i32, y: i32, sum: &mut i32) -> Result<(), BoundedError> {
    match add_bounded(x, y) {
        Ok(value) => {
            *sum = value;
            Ok(())
        }
        Err(err) => {
            *sum = SUM_SENTINEL;
            Err(err)
        }
    }
}

/// Adds the two fields of a pair, wrapping on overflow.
#[must_use]
pub const fn pair_add(pair: &Pair) -> i32 {
    pair.sum()
}
