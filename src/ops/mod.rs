//! Library operations.
//!
//! Every operation comes in an unbounded form and a bounded form:
//!
//! - **Sums**: [`add`] / [`add_bounded`], [`add_into`], [`pair_add`]
//! - **Version**: [`get_version`] / [`get_version_bounded`]
//! - **Greeting**: [`greeting`] / [`greeting_bounded`]
//!
//! Bounded forms never allocate and never write past the capacity of the
//! buffer they are given.

pub mod arith;
pub mod greeting;
pub mod version;

pub use arith::{SUM_SENTINEL, add, add_bounded, add_into, pair_add};
pub use greeting::{GREETING_PREFIX, Written, greeting, greeting_bounded, greeting_len};
pub use version::{VERSION, VERSION_CSTR, get_version, get_version_bounded};
