//! Greeting strings.
//!
//! [`greeting`] allocates. [`greeting_bounded`] writes into a caller buffer
//! and, when called without one, reports how much room the greeting needs.

use crate::core::BoundedBuffer;
use crate::error::BoundedError;
use serde::Serialize;

/// Text placed before the name.
pub const GREETING_PREFIX: &str = "Hello, ";

/// Result of a successful [`greeting_bounded`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "len", rename_all = "snake_case")]
pub enum Written {
    /// The greeting was stored; holds its length without terminator.
    Stored(usize),
    /// No buffer was supplied; holds the length the greeting would need,
    /// terminator excluded.
    Measured(usize),
}

impl Written {
    /// Returns the greeting length carried by either variant.
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Stored(len) | Self::Measured(len) => len,
        }
    }

    /// Returns true when the carried length is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Builds `"Hello, {name}"`.
///
/// # Examples
///
/// ```
/// assert_eq!(adder::greeting("C program"), "Hello, C program");
/// ```
#[must_use]
pub fn greeting(name: &str) -> String {
    format!("{GREETING_PREFIX}{name}")
}

/// Returns the byte length of the greeting for `name`, terminator excluded.
#[must_use]
pub const fn greeting_len(name: &str) -> usize {
    GREETING_PREFIX.len() + name.len()
}

/// Writes the greeting for `name` into `buf`.
///
/// Passing `None`, or a buffer with zero capacity, is a measuring call: it
/// writes nothing and returns [`Written::Measured`].
///
/// # Errors
///
/// Returns [`BoundedError::InsufficientCapacity`] when the buffer cannot
/// hold the greeting and its terminator; `buf` is left empty.
///
/// # Examples
///
/// ```
/// use adder::core::BoundedBuffer;
/// use adder::{Written, greeting_bounded};
///
/// assert_eq!(greeting_bounded("Python", None), Ok(Written::Measured(13)));
///
/// let mut storage = [0u8; 32];
/// let mut buf = BoundedBuffer::new(&mut storage);
/// assert_eq!(greeting_bounded("Python", Some(&mut buf)), Ok(Written::Stored(13)));
/// assert_eq!(buf.as_str(), "Hello, Python");
/// ```
pub fn greeting_bounded(
    name: &str,
    buf: Option<&mut BoundedBuffer<'_>>,
) -> Result<Written, BoundedError> {
    match buf {
        Some(buf) if buf.capacity() > 0 => buf
            .write_fmt_all(format_args!("{GREETING_PREFIX}{name}"))
            .map(Written::Stored),
        _ => {
            let required = greeting_len(name);
            tracing::debug!(required, "greeting measured without a buffer");
            Ok(Written::Measured(required))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StackBuffer, TERMINATOR};

    const STR_BUF_LEN: usize = 32;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting("C program"), "Hello, C program");
        assert_eq!(greeting(""), "Hello, ");
    }

    #[test]
    fn test_greeting_is_not_length_limited() {
        let name = "a rather long name that would not fit twenty bytes";
        assert_eq!(greeting(name).len(), greeting_len(name));
    }

    #[test]
    fn test_greeting_len() {
        assert_eq!(greeting_len("Python"), "Python".len() + GREETING_PREFIX.len());
        assert_eq!(greeting_len(""), 7);
    }

    #[test]
    fn test_greeting_bounded_no_buffer() {
        assert_eq!(
            greeting_bounded("Python", None),
            Ok(Written::Measured("Python".len() + GREETING_PREFIX.len()))
        );
    }

    #[test]
    fn test_greeting_bounded_zero_capacity_measures() {
        let mut storage = [b'x'; STR_BUF_LEN];
        let mut buf = BoundedBuffer::with_capacity(&mut storage, 0);
        assert_eq!(
            greeting_bounded("Python", Some(&mut buf)),
            Ok(Written::Measured(13))
        );
        drop(buf);
        assert!(storage.iter().all(|&b| b == b'x'));
    }

    #[test]
    fn test_greeting_bounded_small_buf() {
        let mut storage = [b'x'; STR_BUF_LEN];
        let mut buf = BoundedBuffer::with_capacity(&mut storage, 5);
        assert_eq!(
            greeting_bounded("Python", Some(&mut buf)),
            Err(BoundedError::InsufficientCapacity {
                required: 14,
                capacity: 5
            })
        );
        assert_eq!(buf.as_str(), "");
        drop(buf);
        assert_eq!(storage[0], TERMINATOR);
        assert!(storage[5..].iter().all(|&b| b == b'x'));
    }

    #[test]
    fn test_greeting_bounded() {
        let mut storage = [b'x'; STR_BUF_LEN];
        let mut buf = BoundedBuffer::new(&mut storage);
        assert_eq!(
            greeting_bounded("Python", Some(&mut buf)),
            Ok(Written::Stored(13))
        );
        assert_eq!(buf.as_str(), "Hello, Python");
        assert_eq!(buf.as_str(), greeting("Python"));
    }

    #[test]
    fn test_greeting_bounded_stack_buffer() {
        let mut out = StackBuffer::<14>::new();
        let written = greeting_bounded("Python", Some(&mut out.bounded())).unwrap();
        assert_eq!(written.len(), 13);
        assert!(!written.is_empty());
        assert_eq!(out.as_str(), "Hello, Python");
    }

    #[test]
    fn test_written_serialization() {
        let json = serde_json::to_string(&Written::Stored(13)).unwrap();
        assert_eq!(json, r#"{"kind":"stored","len":13}"#);
    }
}
