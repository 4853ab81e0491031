// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with doubling growth and strong failure guarantees.
//!
//! `Vector<T>` owns one heap buffer of `capacity` slots; the first `len` slots
//! hold live elements.
//!
//! # Core Guarantees
//!
//! - **Amortized growth**: a full vector grows 0 → 1 → 2 → 4 → 8 ... on append.
//! - **Exact reservation**: `reserve(n)` grows to exactly `n` slots and never shrinks.
//! - **Strong failure safety**: a failed reallocation or a panicking element clone
//!   leaves the receiver unchanged and leaks nothing.
//! - **Single owner**: moving a vector out leaves the source empty with no buffer.
//! - **Two access contracts**: `at()` checks bounds and returns an error;
//!   `get_unchecked()` does not and is `unsafe`.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use rampart::{vector, Vector, VectorError};
//!
//! fn example() -> Result<(), VectorError> {
//!     let mut vec = Vector::new();
//!     for i in 0u32..5 {
//!         vec.push(i);
//!     }
//!
//!     assert_eq!(vec.len(), 5);
//!     assert_eq!(vec.capacity(), 8);
//!     assert_eq!(*vec.at(4)?, 4);
//!     assert!(vec.at(5).is_err());
//!
//!     let list = vector![10, 20, 30];
//!     assert_eq!(list.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Copy-and-Swap Assignment
//!
//! ```rust
//! use rampart::vector;
//!
//! let source = vector![1, 2, 3];
//! let mut target = vector![9];
//!
//! // The copy is fully built before target changes; target's old buffer is
//! // released when assign() returns.
//! target.assign(source.clone());
//!
//! assert_eq!(target, source);
//! assert_eq!(target.capacity(), source.capacity());
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! rampart = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`VectorBehaviour`] with `Vector::change_behaviour()`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod into_iter;
mod macros;
mod raw_buffer;
mod vector;

#[cfg(test)]
mod tests;

pub use error::VectorError;
pub use into_iter::IntoIter;
pub use vector::Vector;

#[cfg(any(test, feature = "test_utils"))]
pub use vector::VectorBehaviour;
