//! Bounded output buffers.
//!
//! A [`BoundedBuffer`] wraps caller-owned storage and a declared capacity.
//! Writes are all-or-nothing: the formatted text plus a NUL terminator is
//! stored only if it fits, otherwise the buffer is left holding an empty
//! string. Nothing past the declared capacity is ever written.

use crate::error::BoundedError;
use std::fmt::{self, Write};

/// NUL terminator written after every stored string.
pub const TERMINATOR: u8 = 0;

/// A caller-owned, fixed-capacity text buffer.
///
/// # Examples
///
/// ```
/// use adder::core::BoundedBuffer;
///
/// let mut storage = [b'x'; 16];
/// let mut buf = BoundedBuffer::new(&mut storage);
/// assert_eq!(buf.write_str_all("v1.0"), Ok(4));
/// assert_eq!(buf.as_str(), "v1.0");
/// ```
#[derive(Debug)]
pub struct BoundedBuffer<'a> {
    storage: &'a mut [u8],
    capacity: usize,
    len: usize,
    /// Owner's copy of `len`, kept in step with every write.
    len_slot: Option<&'a mut usize>,
}

impl<'a> BoundedBuffer<'a> {
    /// Creates a buffer whose capacity is the full length of `storage`.
    #[must_use]
    pub fn new(storage: &'a mut [u8]) -> Self {
        let capacity = storage.len();
        Self {
            storage,
            capacity,
            len: 0,
            len_slot: None,
        }
    }

    /// Creates a buffer that declares `capacity` bytes of `storage`.
    ///
    /// The capacity is clamped to the storage length. Bytes past the
    /// declared capacity are never touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use adder::core::BoundedBuffer;
    ///
    /// let mut storage = [b'x'; 32];
    /// let mut buf = BoundedBuffer::with_capacity(&mut storage, 5);
    /// assert!(buf.write_str_all("Hello, Python").is_err());
    /// assert!(buf.is_empty());
    /// drop(buf);
    /// assert_eq!(storage[0], 0);
    /// assert!(storage[1..].iter().all(|&b| b == b'x'));
    /// ```
    #[must_use]
    pub fn with_capacity(storage: &'a mut [u8], capacity: usize) -> Self {
        let capacity = capacity.min(storage.len());
        Self {
            storage,
            capacity,
            len: 0,
            len_slot: None,
        }
    }

    /// Like [`with_capacity`](Self::with_capacity), reporting the stored
    /// length back into `len_slot`, which must describe `storage`.
    fn tracked(storage: &'a mut [u8], capacity: usize, len_slot: &'a mut usize) -> Self {
        let capacity = capacity.min(storage.len());
        let len = (*len_slot).min(storage.len());
        Self {
            storage,
            capacity,
            len,
            len_slot: Some(len_slot),
        }
    }

    fn set_len(&mut self, len: usize) {
        self.len = len;
        if let Some(slot) = self.len_slot.as_deref_mut() {
            *slot = len;
        }
    }

    /// Returns the declared capacity in bytes, terminator included.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the length of the stored text, terminator excluded.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the buffer holds an empty string.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the stored text without its terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.len]
    }

    /// Returns the stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only whole `str` values are ever stored.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Resets the buffer to the empty string.
    ///
    /// The terminator is written at offset 0 when the capacity allows it.
    pub fn clear(&mut self) {
        self.set_len(0);
        if self.capacity > 0 {
            self.storage[0] = TERMINATOR;
        }
    }

    /// Stores `s` followed by a terminator.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedError::InsufficientCapacity`] when `s.len() + 1`
    /// exceeds the capacity; the buffer is cleared in that case.
    pub fn write_str_all(&mut self, s: &str) -> Result<usize, BoundedError> {
        self.write_fmt_all(format_args!("{s}"))
    }

    /// Formats `args` into the buffer followed by a terminator.
    ///
    /// The output is measured first and written only if it fits. Returns
    /// the number of text bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedError::InsufficientCapacity`] when the formatted
    /// text plus terminator exceeds the capacity, and
    /// [`BoundedError::InvalidInput`] if a formatter fails. The buffer is
    /// cleared on error.
    pub fn write_fmt_all(&mut self, args: fmt::Arguments<'_>) -> Result<usize, BoundedError> {
        let text_len = measure(args);
        let required = text_len + 1;

        if required > self.capacity {
            self.clear();
            tracing::debug!(required, capacity = self.capacity, "bounded write rejected");
            return Err(BoundedError::InsufficientCapacity {
                required,
                capacity: self.capacity,
            });
        }

        let mut cursor = SliceWriter {
            dst: &mut self.storage[..text_len],
            pos: 0,
        };
        if cursor.write_fmt(args).is_err() || cursor.pos != text_len {
            self.clear();
            return Err(BoundedError::invalid_input("formatting failed"));
        }

        self.storage[text_len] = TERMINATOR;
        self.set_len(text_len);
        tracing::trace!(len = text_len, capacity = self.capacity, "bounded write stored");
        Ok(text_len)
    }
}

/// A fixed-size buffer that owns its storage.
///
/// Lends a [`BoundedBuffer`] over the whole array and remembers the length
/// of what it stored, so the text survives the borrow intact, interior NUL
/// bytes included.
///
/// # Examples
///
/// ```
/// use adder::core::StackBuffer;
///
/// let mut buf = StackBuffer::<32>::new();
/// buf.bounded().write_str_all("Hello, Rust").unwrap();
/// assert_eq!(buf.as_str(), "Hello, Rust");
/// ```
#[derive(Debug, Clone)]
pub struct StackBuffer<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> StackBuffer<N> {
    /// Creates a zeroed buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: [0u8; N],
            len: 0,
        }
    }

    /// Borrows the storage as a bounded buffer with capacity `N`.
    pub fn bounded(&mut self) -> BoundedBuffer<'_> {
        BoundedBuffer::tracked(&mut self.data, N, &mut self.len)
    }

    /// Borrows the storage with a smaller declared capacity.
    pub fn bounded_with_capacity(&mut self, capacity: usize) -> BoundedBuffer<'_> {
        BoundedBuffer::tracked(&mut self.data, capacity, &mut self.len)
    }

    /// Returns the length of the stored text, terminator excluded.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the buffer holds an empty string.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the text stored by the last write.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.data[..self.len]).unwrap_or_default()
    }

    /// Returns the raw storage.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }
}

impl<const N: usize> Default for StackBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the byte length `args` formats to.
#[must_use]
pub fn measure(args: fmt::Arguments<'_>) -> usize {
    if let Some(s) = args.as_str() {
        return s.len();
    }
    let mut counter = LenCounter(0);
    // `LenCounter` never fails; a failing formatter only shortens the count.
    let _ = counter.write_fmt(args);
    counter.0
}

/// Counts bytes without storing them.
struct LenCounter(usize);

impl Write for LenCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

/// Writes into a slice, failing instead of overrunning it.
struct SliceWriter<'b> {
    dst: &'b mut [u8],
    pos: usize,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.pos.checked_add(s.len()).ok_or(fmt::Error)?;
        let slot = self.dst.get_mut(self.pos..end).ok_or(fmt::Error)?;
        slot.copy_from_slice(s.as_bytes());
        self.pos = end;
        Ok(())
    }
}
