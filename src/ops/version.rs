//! Library version string.

use crate::core::BoundedBuffer;
use crate::error::BoundedError;
use std::ffi::CStr;

/// NUL-terminated form of [`VERSION`], handed out by the C ABI.
pub const VERSION_CSTR: &CStr = c"v1.0";

/// Version reported by [`get_version`].
pub const VERSION: &str = match VERSION_CSTR.to_str() {
    Ok(version) => version,
    Err(_) => "",
};

/// Returns the library version.
#[must_use]
pub const fn get_version() -> &'static str {
    VERSION
}

/// Writes the library version into `buf`.
///
/// Returns the number of text bytes written.
///
/// # Errors
///
/// Returns [`BoundedError::InsufficientCapacity`] when the buffer cannot
/// hold the version and its terminator; `buf` is left empty.
///
/// # Examples
///
/// ```
/// use adder::core::BoundedBuffer;
/// use adder::{VERSION, get_version_bounded};
///
/// let mut storage = [0u8; 32];
/// let mut buf = BoundedBuffer::new(&mut storage);
/// assert_eq!(get_version_bounded(&mut buf), Ok(VERSION.len()));
/// assert_eq!(buf.as_str(), VERSION);
/// ```
pub fn get_version_bounded(buf: &mut BoundedBuffer<'_>) -> Result<usize, BoundedError> {
    buf.write_str_all(VERSION)
}
