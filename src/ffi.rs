//! C ABI exports.
//!
//! Exposes the `adder.h` interface: every `*_rs` function takes a raw output
//! buffer and its length and reports a [`Status`] code instead of
//! allocating. Pointers are validated before use; null is always accepted.
//!
//! ```c
//! int    adder_add(int x, int y);
//! int    adder_add_rs(int x, int y, int *sum);
//! int    adder_pair_add(const Pair *pair);
//! const char *adder_get_version(void);
//! int    adder_get_version_rs(char *output, size_t buflen);
//! char  *adder_greeting(const char *name);
//! size_t adder_greeting_rs(const char *name, char *output, size_t buflen);
//! void   adder_string_free(char *s);
//! ```

#![allow(unsafe_code)]

use crate::core::{BoundedBuffer, Pair, Status};
use crate::ops::{
    VERSION_CSTR, add, add_into, get_version_bounded, greeting, greeting_bounded, pair_add,
};
use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

/// Adds two integers, wrapping on overflow.
#[unsafe(no_mangle)]
pub extern "C" fn adder_add(x: c_int, y: c_int) -> c_int {
    add(x, y)
}

/// Adds two non-negative integers into `*sum`.
///
/// Returns `0` on success. On failure returns the status code and stores
/// `0` in `*sum`. A null `sum` yields [`Status::InvalidInput`].
///
/// # Safety
///
/// `sum` must be null or valid for writing one `int`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn adder_add_rs(x: c_int, y: c_int, sum: *mut c_int) -> c_int {
    // SAFETY: the caller guarantees `sum` is null or writable.
    let Some(slot) = (unsafe { sum.as_mut() }) else {
        return Status::InvalidInput.code();
    };
    Status::of(&add_into(x, y, slot)).code()
}

/// Adds the fields of `*pair`. Returns `0` for a null pointer.
///
/// # Safety
///
/// `pair` must be null or point to a valid `Pair`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn adder_pair_add(pair: *const Pair) -> c_int {
    // SAFETY: the caller guarantees `pair` is null or valid.
    unsafe { pair.as_ref() }.map_or(0, pair_add)
}

/// Returns the library version as a static C string.
#[unsafe(no_mangle)]
pub extern "C" fn adder_get_version() -> *const c_char {
    VERSION_CSTR.as_ptr()
}

/// Copies the version into `output`.
///
/// Returns `0` on success. When `buflen` is too small (or `output` is
/// null) returns [`Status::InsufficientCapacity`] and, if possible, leaves
/// `output` as an empty string.
///
/// # Safety
///
/// `output` must be null or valid for writing `buflen` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn adder_get_version_rs(output: *mut c_char, buflen: usize) -> c_int {
    // SAFETY: forwarded caller guarantee on `output` and `buflen`.
    let Some(mut buf) = (unsafe { output_buffer(output, buflen) }) else {
        return Status::InsufficientCapacity.code();
    };
    Status::of(&get_version_bounded(&mut buf)).code()
}

/// Returns a heap-allocated greeting for `name`, or null if `name` is null
/// or not UTF-8. Release the result with [`adder_string_free`].
///
/// # Safety
///
/// `name` must be null or a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn adder_greeting(name: *const c_char) -> *mut c_char {
    // SAFETY: forwarded caller guarantee on `name`.
    let Some(name) = (unsafe { name_arg(name) }) else {
        return ptr::null_mut();
    };
    CString::new(greeting(name)).map_or(ptr::null_mut(), CString::into_raw)
}

/// Writes the greeting for `name` into `output`.
///
/// Returns the greeting length (terminator excluded) on success. When
/// `output` is null or `buflen` is zero nothing is written and the
/// required length is returned. Returns `0` on failure, leaving `output`
/// as an empty string.
///
/// # Safety
///
/// `name` must be null or a valid NUL-terminated string; `output` must be
/// null or valid for writing `buflen` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn adder_greeting_rs(
    name: *const c_char,
    output: *mut c_char,
    buflen: usize,
) -> usize {
    // SAFETY: forwarded caller guarantees.
    let mut buf = unsafe { output_buffer(output, buflen) };
    let Some(name) = (unsafe { name_arg(name) }) else {
        if let Some(buf) = buf.as_mut() {
            buf.clear();
        }
        return 0;
    };
    greeting_bounded(name, buf.as_mut()).map_or(0, |written| written.len())
}

/// Releases a string returned by [`adder_greeting`]. Null is ignored.
///
/// # Safety
///
/// `s` must be null or a pointer obtained from [`adder_greeting`] that has
/// not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn adder_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    // SAFETY: `s` came from `CString::into_raw` per the caller contract.
    drop(unsafe { CString::from_raw(s) });
}

/// Wraps a raw output pointer, or returns `None` for null/zero length.
///
/// # Safety
///
/// `output` must be null or valid for writing `buflen` bytes for `'a`.
unsafe fn output_buffer<'a>(output: *mut c_char, buflen: usize) -> Option<BoundedBuffer<'a>> {
    if output.is_null() || buflen == 0 {
        return None;
    }
    // SAFETY: non-null and writable for `buflen` bytes per the caller.
    let storage = unsafe { std::slice::from_raw_parts_mut(output.cast::<u8>(), buflen) };
    Some(BoundedBuffer::new(storage))
}

/// Borrows a C string argument as UTF-8.
///
/// # Safety
///
/// `name` must be null or a valid NUL-terminated string for `'a`.
unsafe fn name_arg<'a>(name: *const c_char) -> Option<&'a str> {
    if name.is_null() {
        return None;
    }
    // SAFETY: non-null and NUL-terminated per the caller.
    unsafe { CStr::from_ptr(name) }.to_str().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{VERSION, get_version};

    const STR_BUF_LEN: usize = 32;

    fn c_text(buf: &[c_char]) -> String {
        let bytes: Vec<u8> = buf
            .iter()
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_adder_get_version_matches_library() {
        let version = unsafe { CStr::from_ptr(adder_get_version()) };
        assert_eq!(version.to_str().unwrap(), get_version());
        assert_eq!(version.to_bytes().len(), VERSION.len());
    }

    #[test]
    fn test_adder_add() {
        assert_eq!(adder_add(2, 3), 5);
    }

    #[test]
    fn test_adder_add_rs() {
        let mut sum = 0;
        let rv = unsafe { adder_add_rs(2, 3, &raw mut sum) };
        assert_eq!(rv, 0);
        assert_eq!(sum, 5);

        let rv = unsafe { adder_add_rs(2, -3, &raw mut sum) };
        assert_ne!(rv, 0);
        assert_eq!(rv, Status::InvalidInput.code());
        assert_eq!(sum, 0);
    }

    #[test]
    fn test_adder_add_rs_null_sum() {
        let rv = unsafe { adder_add_rs(2, 3, ptr::null_mut()) };
        assert_eq!(rv, Status::InvalidInput.code());
    }

    #[test]
    fn test_adder_pair_add() {
        let pair = Pair { x: 3, y: 4 };
        assert_eq!(unsafe { adder_pair_add(&raw const pair) }, 7);
        assert_eq!(unsafe { adder_pair_add(ptr::null()) }, 0);
    }

    #[test]
    fn test_adder_get_version() {
        let version = unsafe { CStr::from_ptr(adder_get_version()) };
        assert_eq!(version.to_str().unwrap(), VERSION);
    }

    #[test]
    fn test_adder_get_version_rs() {
        let mut output = [b'x' as c_char; STR_BUF_LEN];

        let rv = unsafe { adder_get_version_rs(output.as_mut_ptr(), 2) };
        assert_eq!(rv, Status::InsufficientCapacity.code());
        assert_eq!(c_text(&output), "");
        assert_eq!(output[2], b'x' as c_char);

        let mut output = [b'x' as c_char; STR_BUF_LEN];
        let rv = unsafe { adder_get_version_rs(output.as_mut_ptr(), STR_BUF_LEN) };
        assert_eq!(rv, 0);
        assert_eq!(c_text(&output), VERSION);
    }

    #[test]
    fn test_adder_get_version_rs_null_output() {
        let rv = unsafe { adder_get_version_rs(ptr::null_mut(), STR_BUF_LEN) };
        assert_eq!(rv, Status::InsufficientCapacity.code());
    }

    #[test]
    fn test_adder_get_version_rs_zero_buflen() {
        let mut output = [b'x' as c_char; STR_BUF_LEN];
        let rv = unsafe { adder_get_version_rs(output.as_mut_ptr(), 0) };
        assert_eq!(rv, Status::InsufficientCapacity.code());
        assert!(output.iter().all(|&c| c == b'x' as c_char));
    }

    #[test]
    fn test_adder_greeting_round_trip_through_free() {
        let s = unsafe { adder_greeting(c"C program".as_ptr()) };
        assert!(!s.is_null());
        let text = unsafe { CStr::from_ptr(s) }.to_str().unwrap().to_string();
        assert_eq!(text, "Hello, C program");
        unsafe { adder_string_free(s) };
        unsafe { adder_string_free(ptr::null_mut()) };
    }

    #[test]
    fn test_adder_greeting_null_name() {
        assert!(unsafe { adder_greeting(ptr::null()) }.is_null());
    }

    #[test]
    fn test_adder_greeting_rs_null_pointer() {
        let rv = unsafe { adder_greeting_rs(c"Python".as_ptr(), ptr::null_mut(), 0) };
        assert_eq!(rv, "Python".len() + "Hello, ".len());
    }

    #[test]
    fn test_adder_greeting_rs() {
        let mut output = [b'x' as c_char; STR_BUF_LEN];
        let rv = unsafe { adder_greeting_rs(c"Python".as_ptr(), output.as_mut_ptr(), 5) };
        assert_eq!(rv, 0);
        assert_eq!(c_text(&output), "");
        assert!(output[5..].iter().all(|&c| c == b'x' as c_char));

        let mut output = [b'x' as c_char; STR_BUF_LEN];
        let rv =
            unsafe { adder_greeting_rs(c"Python".as_ptr(), output.as_mut_ptr(), STR_BUF_LEN) };
        assert_eq!(rv, 13);
        assert_eq!(c_text(&output), "Hello, Python");
    }

    #[test]
    fn test_adder_greeting_rs_null_name_clears_output() {
        let mut output = [b'x' as c_char; STR_BUF_LEN];
        let rv = unsafe { adder_greeting_rs(ptr::null(), output.as_mut_ptr(), STR_BUF_LEN) };
        assert_eq!(rv, 0);
        assert_eq!(output[0], 0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        const STORAGE: usize = 64;
        const FILL: c_char = b'x' as c_char;

        fn untouched(output: &[c_char]) -> bool {
            output.iter().all(|&c| c == FILL)
        }

        proptest! {
            #[test]
            fn get_version_rs_stays_within_buflen(buflen in 0usize..STORAGE) {
                let mut output = [FILL; STORAGE];
                let rv = unsafe { adder_get_version_rs(output.as_mut_ptr(), buflen) };

                if buflen > VERSION.len() {
                    prop_assert_eq!(rv, Status::Ok.code());
                    prop_assert_eq!(c_text(&output), VERSION);
                    prop_assert!(untouched(&output[VERSION.len() + 1..]));
                } else {
                    prop_assert_eq!(rv, Status::InsufficientCapacity.code());
                    if buflen > 0 {
                        prop_assert_eq!(output[0], 0);
                    }
                }
                prop_assert!(untouched(&output[buflen..]));
            }

            #[test]
            fn greeting_rs_stays_within_buflen(
                name in "[a-zA-Z ]{0,40}",
                buflen in 0usize..STORAGE,
            ) {
                let c_name = CString::new(name.as_str()).unwrap();
                let len = greeting(&name).len();
                let mut output = [FILL; STORAGE];
                let rv = unsafe { adder_greeting_rs(c_name.as_ptr(), output.as_mut_ptr(), buflen) };

                if buflen == 0 {
                    prop_assert_eq!(rv, len);
                    prop_assert!(untouched(&output));
                } else if len + 1 > buflen {
                    prop_assert_eq!(rv, 0);
                    prop_assert_eq!(output[0], 0);
                    prop_assert!(untouched(&output[1..]));
                } else {
                    prop_assert_eq!(rv, len);
                    prop_assert_eq!(c_text(&output), greeting(&name));
                    prop_assert!(untouched(&output[len + 1..]));
                }
                prop_assert!(untouched(&output[buflen..]));
            }
        }
    }
}
