// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared count of [`Tracked`] values dropped so far.
///
/// Cloning a `DropCounter` shares the same count.
#[derive(Clone, Default)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked values dropped so far.
    pub fn count(&self) -> usize {
        self.drops.get()
    }

    /// Wraps `value` so that dropping it (or any of its clones) bumps this counter.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            counter: self.clone(),
        }
    }
}

impl fmt::Debug for DropCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropCounter")
            .field("drops", &self.count())
            .finish()
    }
}

/// A value that reports its drop to a [`DropCounter`].
pub struct Tracked<T> {
    value: T,
    counter: DropCounter,
}

impl<T> Tracked<T> {
    /// Returns the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.counter.track(self.value.clone())
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        let drops = &self.counter.drops;
        drops.set(drops.get() + 1);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        // Skip counter (shared test state)
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
