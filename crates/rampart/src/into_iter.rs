// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::{fmt, ptr, slice};

use crate::raw_buffer::RawBuffer;

/// Owning iterator over the elements of a [`Vector`](crate::Vector).
///
/// Elements not yielded are dropped together with the iterator, then the
/// buffer is released.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    // Live slots are `start..end`.
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(buf: RawBuffer<T>, len: usize) -> Self {
        Self {
            buf,
            start: 0,
            end: len,
        }
    }

    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): slots start..end are live
            slice::from_raw_parts(self.buf.as_ptr().add(self.start), self.end - self.start)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        let index = self.start;
        self.start += 1;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): slot `index` was live and is no longer counted
            Some(ptr::read(self.buf.as_ptr().add(index)))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): slot `end` was live and is no longer counted
            Some(ptr::read(self.buf.as_ptr().add(self.end)))
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): start <= end <= capacity
                self.buf.as_mut_ptr().add(self.start)
            },
            self.end - self.start,
        );
        self.start = self.end;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): the remaining slots are live and dropped once
            ptr::drop_in_place(remaining);
        }
    }
}
