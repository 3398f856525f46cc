//! # adder
//!
//! A tiny arithmetic and greeting library with bounded-buffer variants.
//!
//! Every operation has an unbounded form that returns an owned or static
//! value and a bounded form that writes into caller-owned storage of a
//! declared capacity and reports success or failure.
//!
//! ## Features
//!
//! - **Bounded writes**: all-or-nothing, never past the declared capacity
//! - **Sentinels**: failed calls leave `0` or an empty string behind
//! - **C ABI**: `adder_*` exports behind the `ffi` feature
//! - **CLI**: the `adder` binary runs every operation
//!
//! ```
//! use adder::core::StackBuffer;
//! use adder::{add_bounded, greeting_bounded};
//!
//! assert_eq!(add_bounded(2, 3), Ok(5));
//!
//! let mut out = StackBuffer::<5>::new();
//! assert!(greeting_bounded("Python", Some(&mut out.bounded())).is_err());
//! assert_eq!(out.as_str(), "");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is confined to the C ABI layer
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod ops;

// Re-export commonly used types at crate root
pub use error::{BoundedError, Error, Result};

// Re-export core value types
pub use crate::core::{BoundedBuffer, Pair, StackBuffer, Status};

// Re-export operations
pub use ops::{
    GREETING_PREFIX, SUM_SENTINEL, VERSION, VERSION_CSTR, Written, add, add_bounded, add_into,
    get_version, get_version_bounded, greeting, greeting_bounded, greeting_len, pair_add,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
