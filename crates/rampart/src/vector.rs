// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::hash::{Hash, Hasher};
use core::mem::{self, ManuallyDrop};
use core::ops::{Deref, DerefMut};
use core::{fmt, ptr, slice};

use crate::error::VectorError;
use crate::into_iter::IntoIter;
use crate::raw_buffer::RawBuffer;

/// Test behaviour for injecting failures in `Vector` operations.
///
/// Only available with the `test_utils` feature. It lets users exercise the
/// allocation-failure paths of their own code without exhausting memory.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "test_utils")]
/// # fn main() {
/// use rampart::{Vector, VectorBehaviour};
///
/// let mut vec = Vector::<u8>::new();
/// vec.change_behaviour(VectorBehaviour::FailAtReserve);
///
/// assert!(vec.try_reserve(16).is_err());
/// assert_eq!(vec.capacity(), 0);
///
/// vec.change_behaviour(VectorBehaviour::None);
/// assert!(vec.try_reserve(16).is_ok());
/// assert_eq!(vec.capacity(), 16);
/// # }
/// # #[cfg(not(feature = "test_utils"))]
/// # fn main() {}
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VectorBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `try_reserve()` that needs to reallocate fails with `AllocFailed`.
    FailAtReserve,
}

/// A contiguous, growable array that owns its elements.
///
/// `Vector` keeps `len` live elements at the front of a buffer of `capacity`
/// slots. Appending to a full vector reallocates with a doubling policy
/// (0 → 1 → 2 → 4 → 8 ...), so a sequence of appends costs amortized O(1).
///
/// # Reallocation
///
/// When the buffer must grow:
/// 1. Allocate the new buffer (on failure nothing has changed)
/// 2. Move the live elements into it, in order
/// 3. Release the old buffer and adopt the new one
///
/// Moving an element is a bitwise copy and cannot fail, so a reallocation
/// either completes or leaves the vector exactly as it was.
///
/// # Example
///
/// ```rust
/// use rampart::{vector, Vector, VectorError};
///
/// let mut vec = Vector::new();
/// vec.push(1);
/// vec.push(2);
/// vec.push(3);
///
/// assert_eq!(vec.capacity(), 4);
/// assert_eq!(vec, vector![1, 2, 3]);
///
/// assert_eq!(vec.at(1), Ok(&2));
/// assert_eq!(vec.at(3), Err(VectorError::OutOfRange { index: 3, len: 3 }));
/// ```
pub struct Vector<T> {
    buf: RawBuffer<T>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: VectorBehaviour,
}

impl<T> Vector<T> {
    /// Creates a new empty `Vector`. Nothing is allocated.
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::empty(),
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: VectorBehaviour::None,
        }
    }

    /// Creates an empty `Vector` with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows, aborts if allocation fails.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vector = Self::new();
        vector.reserve(capacity);
        vector
    }

    /// Fallible version of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, VectorError> {
        let mut vector = Self::new();
        vector.try_reserve(capacity)?;
        Ok(vector)
    }

    /// Creates a `Vector` holding `count` copies of `value`.
    ///
    /// `len` and `capacity` are both exactly `count`. The last slot receives
    /// `value` itself, so only `count - 1` clones are made.
    ///
    /// If a clone panics, the elements built so far are dropped and the
    /// buffer is released before the panic continues.
    pub fn from_elem(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        let mut vector = Self::with_capacity(count);
        if count == 0 {
            return vector;
        }

        for _ in 1..count {
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): with_capacity(count) and len < count - 1
                vector.write_unchecked(value.clone());
            }
        }

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): exactly one slot remains
            vector.write_unchecked(value);
        }

        vector
    }

    /// Creates a `Vector` holding `count` default values.
    pub fn with_len(count: usize) -> Self
    where
        T: Default,
    {
        let mut vector = Self::with_capacity(count);
        for _ in 0..count {
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): with_capacity(count) and len < count
                vector.write_unchecked(T::default());
            }
        }

        vector
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Grows the buffer to exactly `capacity` slots if it is currently smaller.
    ///
    /// Never shrinks. Live elements keep their order.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows, aborts if allocation fails.
    pub fn reserve(&mut self, capacity: usize) {
        if let Err(err) = self.reserve_inner(capacity) {
            handle_reserve_error(err);
        }
    }

    /// Fallible version of [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// - [`VectorError::CapacityOverflow`] if `capacity` slots do not fit in `isize::MAX` bytes.
    /// - [`VectorError::AllocFailed`] if the allocator refuses the request.
    ///
    /// On error the vector is left unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), VectorError> {
        #[cfg(any(test, feature = "test_utils"))]
        if self.behaviour == VectorBehaviour::FailAtReserve && capacity > self.capacity() {
            let layout = RawBuffer::<T>::layout_for(capacity)?;
            return Err(VectorError::AllocFailed { layout });
        }

        self.reserve_inner(capacity)
    }

    #[inline(always)]
    fn reserve_inner(&mut self, capacity: usize) -> Result<(), VectorError> {
        if capacity <= self.capacity() {
            return Ok(());
        }

        self.reallocate(capacity)
    }

    #[cold]
    #[inline(never)]
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), VectorError> {
        let mut new_buf = RawBuffer::allocate(new_capacity)?;

        log::trace!(
            "Vector reallocation: capacity {} -> {} (len {})",
            self.capacity(),
            new_capacity,
            self.len
        );

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): moving exactly len() live elements into a
            // distinct allocation with new_capacity > capacity() >= len() slots
            ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
        }

        // The old buffer only frees memory; its elements now live in new_buf.
        self.buf = new_buf;

        Ok(())
    }

    /// Capacity after growing a full buffer: 1 from empty, doubled otherwise.
    #[inline]
    fn next_capacity(current: usize) -> Result<usize, VectorError> {
        if current == 0 {
            return Ok(1);
        }

        current
            .checked_mul(2)
            .ok_or(VectorError::CapacityOverflow)
    }

    #[inline(always)]
    fn grow_for_push(&mut self) {
        if self.len < self.capacity() {
            return;
        }

        let grown = Self::next_capacity(self.capacity()).and_then(|cap| self.reserve_inner(cap));
        if let Err(err) = grown {
            handle_reserve_error(err);
        }
    }

    /// Writes `value` into slot `len` and counts it as live.
    ///
    /// # Safety
    ///
    /// `len < capacity` must hold.
    #[inline(always)]
    unsafe fn write_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());

        unsafe {
            // SAFETY: caller guarantees slot `len` is inside the buffer and not live
            ptr::write(self.buf.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Appends `value` by moving it into the next free slot.
    ///
    /// Grows the buffer first when it is full.
    pub fn push(&mut self, value: T) {
        self.grow_for_push();

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): grow_for_push guarantees len < capacity
            self.write_unchecked(value);
        }
    }

    /// Appends a clone of `value`.
    ///
    /// Uses the same growth trigger as [`push`](Self::push). The clone is made
    /// before any growth, so a panicking clone leaves the vector untouched.
    pub fn push_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        let value = value.clone();
        self.push(value);
    }

    /// Removes the last element and returns it, or `None` if the vector is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): slot `len` was live and is no longer counted
            Some(ptr::read(self.buf.as_ptr().add(self.len)))
        }
    }

    /// Drops the elements at positions `len..` and keeps the first `len`.
    ///
    /// No-op if `len >= self.len()`. Capacity is retained.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let tail = ptr::slice_from_raw_parts_mut(
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): len < self.len <= capacity
                self.buf.as_mut_ptr().add(len)
            },
            self.len - len,
        );

        // Shrink first: a panicking destructor must not cause a second drop.
        self.len = len;

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): the tail was live and is no longer counted
            ptr::drop_in_place(tail);
        }
    }

    /// Drops all elements. Capacity and the allocation are retained.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        if index >= self.len {
            return Err(VectorError::OutOfRange {
                index,
                len: self.len,
            });
        }

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): index < len
            Ok(self.get_unchecked(index))
        }
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        if index >= self.len {
            return Err(VectorError::OutOfRange {
                index,
                len: self.len,
            });
        }

        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): index < len
            Ok(self.get_unchecked_mut(index))
        }
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// `index < len()` must hold. Anything else is undefined behavior; only
    /// debug builds check it.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);

        unsafe {
            // SAFETY: caller guarantees index < len, so the slot is live
            &*self.buf.as_ptr().add(index)
        }
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// `index < len()` must hold. Anything else is undefined behavior; only
    /// debug builds check it.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);

        unsafe {
            // SAFETY: caller guarantees index < len, so the slot is live
            &mut *self.buf.as_mut_ptr().add(index)
        }
    }

    /// Returns a slice over the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): the first len slots are live; the pointer
            // is aligned and non-null even without an allocation
            slice::from_raw_parts(self.buf.as_ptr(), self.len)
        }
    }

    /// Returns a mutable slice over the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): the first len slots are live and exclusively borrowed
            slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len)
        }
    }

    /// Raw pointer to the buffer. Invalidated by any reallocation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Raw mutable pointer to the buffer. Invalidated by any reallocation.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Exchanges the buffer, length and capacity of two vectors.
    ///
    /// Named apart from the slice's `swap(i, j)`, which stays reachable through `Deref`.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Replaces the contents of `self` with `other` (copy-and-swap).
    ///
    /// `other` is fully built by the caller (cloned or moved in), then swapped
    /// with `self`. The old buffer leaves with `other` and is released when
    /// this call returns. `a.assign(a.clone())` is safe.
    pub fn assign(&mut self, mut other: Self) {
        self.swap_with(&mut other);
    }

    /// Moves the contents out, leaving `self` empty with no allocation.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Changes the failure-injection behaviour.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: VectorBehaviour) {
        self.behaviour = behaviour;
    }

    /// Splits the vector into its buffer and live length without dropping anything.
    pub(crate) fn into_raw_parts(self) -> (RawBuffer<T>, usize) {
        let mut this = ManuallyDrop::new(self);
        let buf = mem::replace(&mut this.buf, RawBuffer::empty());

        (buf, this.len)
    }
}

#[cold]
#[inline(never)]
fn handle_reserve_error(err: VectorError) -> ! {
    match err {
        VectorError::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
        _ => panic!("capacity overflow"),
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY (PRECONDITIONS ARE MET): the live elements are dropped exactly once
            // here; the buffer itself is freed by RawBuffer afterwards
            ptr::drop_in_place(self.as_mut_slice());
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Copies the live elements into a new buffer with the same capacity.
    ///
    /// If an element clone panics, the partial copy is dropped (its elements
    /// and its buffer) and `self` is untouched.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for value in self.as_slice() {
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): copy.capacity() == self.capacity() >= self.len()
                copy.write_unchecked(value.clone());
            }
        }

        copy
    }

    /// Builds the copy first, then swaps it in. A panicking clone leaves `self` unchanged.
    fn clone_from(&mut self, source: &Self) {
        self.assign(source.clone());
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        // Capacity is not part of the value.
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Vector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        let mut vector = Self::with_capacity(N);
        for value in values {
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): with_capacity(N) and at most N writes
                vector.write_unchecked(value);
            }
        }

        vector
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(values: &[T]) -> Self {
        let mut vector = Self::with_capacity(values.len());
        for value in values {
            unsafe {
                // SAFETY (PRECONDITIONS ARE MET): with_capacity(values.len()) and at most that many writes
                vector.write_unchecked(value.clone());
            }
        }

        vector
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();

        let mut vector = Self::with_capacity(lower);
        vector.extend(iter);
        vector
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push(*value);
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_raw_parts();
        IntoIter::new(buf, len)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
