// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for rampart.
use core::alloc::Layout;

use thiserror::Error;

/// Errors that can occur when working with a [`Vector`](crate::Vector).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum VectorError {
    /// Checked access outside the live elements.
    #[error("Vector::at() index out of range: index {index}, len {len}")]
    OutOfRange {
        /// The requested position.
        index: usize,
        /// The number of live elements at the time of the call.
        len: usize,
    },

    /// The requested capacity does not fit in `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The global allocator refused the request.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocFailed {
        /// Layout of the allocation that failed.
        layout: Layout,
    },
}
