//! Core value types for adder.
//!
//! Operand pairs, bounded output buffers and the status codes every
//! bounded call reports. These are pure types with no I/O dependencies.

pub mod buffer;
pub mod pair;
pub mod status;

pub use buffer::{BoundedBuffer, StackBuffer, TERMINATOR, measure};
pub use pair::Pair;
pub use status::Status;
