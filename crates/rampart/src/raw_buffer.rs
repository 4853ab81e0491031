// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::mem::MaybeUninit;
use core::ptr::NonNull;

use crate::error::VectorError;

/// Exclusively owned block of `capacity` slots, none of which are assumed
/// to be initialized.
///
/// `RawBuffer` only knows about memory. It never reads, writes or drops a `T`;
/// tracking which slots are live is the owner's job. Dropping the buffer frees
/// the allocation exactly once and leaves any values still in it untouched.
pub(crate) struct RawBuffer<T> {
    // `None` iff capacity is 0.
    slots: Option<Box<[MaybeUninit<T>]>>,
}

impl<T> RawBuffer<T> {
    /// A buffer with no allocation.
    pub(crate) const fn empty() -> Self {
        Self { slots: None }
    }

    /// Allocates exactly `capacity` uninitialized slots.
    ///
    /// # Errors
    ///
    /// - [`VectorError::CapacityOverflow`] if `capacity` slots of `T` exceed `isize::MAX` bytes.
    /// - [`VectorError::AllocFailed`] if the global allocator refuses the request.
    pub(crate) fn allocate(capacity: usize) -> Result<Self, VectorError> {
        if capacity == 0 {
            return Ok(Self::empty());
        }

        let layout = Self::layout_for(capacity)?;

        let mut slots: Vec<MaybeUninit<T>> = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| VectorError::AllocFailed { layout })?;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): `capacity` slots were reserved above
            // and `MaybeUninit<T>` is valid without initialization.
            slots.set_len(capacity);
        }

        Ok(Self {
            slots: Some(slots.into_boxed_slice()),
        })
    }

    /// Layout of a block holding `capacity` values of `T`.
    pub(crate) fn layout_for(capacity: usize) -> Result<Layout, VectorError> {
        Layout::array::<T>(capacity).map_err(|_| VectorError::CapacityOverflow)
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.as_ref().map_or(0, |slots| slots.len())
    }

    /// Pointer to the first slot. Dangling (but aligned) when capacity is 0.
    #[inline]
    pub(crate) fn as_ptr(&self) -> *const T {
        match &self.slots {
            Some(slots) => slots.as_ptr().cast(),
            None => NonNull::dangling().as_ptr(),
        }
    }

    /// Mutable pointer to the first slot. Dangling (but aligned) when capacity is 0.
    #[inline]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        match &mut self.slots {
            Some(slots) => slots.as_mut_ptr().cast(),
            None => NonNull::dangling().as_ptr(),
        }
    }
}
