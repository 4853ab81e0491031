// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for rampart crates.
//!
//! - [`CloneBreaker`]: an element whose `clone()` panics once a shared
//!   [`CloneBudget`] runs out, for exercising unwinding paths.
//! - [`Tracked`]: an element that reports its drops to a shared
//!   [`DropCounter`], for checking that nothing leaks or drops twice.
//!
//! ## License
//!
//! GPL-3.0-only

mod clone_breaker;
mod drop_counter;


pub use clone_breaker::{CloneBreaker, CloneBudget, INTENTIONAL_CLONE_PANIC};
pub use drop_counter::{DropCounter, Tracked};
