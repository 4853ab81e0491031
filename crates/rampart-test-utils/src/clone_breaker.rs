// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Panic message used by [`CloneBreaker`] when its budget is exhausted.
pub const INTENTIONAL_CLONE_PANIC: &str = "CloneBreaker: intentional clone failure";

/// Number of clones that may still succeed, shared by every [`CloneBreaker`]
/// created from it.
///
/// Cloning a `CloneBudget` shares the same counter.
#[derive(Clone, Default)]
pub struct CloneBudget {
    remaining: Rc<Cell<usize>>,
}

impl CloneBudget {
    /// Allows exactly `allowed` clones before the next one panics.
    pub fn new(allowed: usize) -> Self {
        Self {
            remaining: Rc::new(Cell::new(allowed)),
        }
    }

    /// A budget that will not run out in practice.
    pub fn unlimited() -> Self {
        Self::new(usize::MAX)
    }

    /// Resets the number of clones that may still succeed.
    pub fn set(&self, allowed: usize) {
        self.remaining.set(allowed);
    }

    /// Number of clones that may still succeed.
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }

    /// Wraps `value` so that its clones draw from this budget.
    pub fn wrap<T>(&self, value: T) -> CloneBreaker<T> {
        CloneBreaker {
            value,
            budget: self.clone(),
        }
    }
}

impl fmt::Debug for CloneBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloneBudget")
            .field("remaining", &self.remaining())
            .finish()
    }
}

/// Test fixture whose `clone()` panics once its [`CloneBudget`] is exhausted.
///
/// # Example
///
/// ```rust
/// use std::panic::{AssertUnwindSafe, catch_unwind};
///
/// use rampart_test_utils::CloneBudget;
///
/// let budget = CloneBudget::new(1);
/// let breaker = budget.wrap(7u32);
///
/// let copy = breaker.clone();
/// assert_eq!(*copy.value(), 7);
///
/// let result = catch_unwind(AssertUnwindSafe(|| breaker.clone()));
/// assert!(result.is_err());
/// ```
pub struct CloneBreaker<T> {
    value: T,
    budget: CloneBudget,
}

impl<T> CloneBreaker<T> {
    /// Returns the wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the wrapped value mutably.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Clone for CloneBreaker<T> {
    fn clone(&self) -> Self {
        let remaining = self.budget.remaining();
        if remaining == 0 {
            panic!("{}", INTENTIONAL_CLONE_PANIC);
        }
        self.budget.set(remaining - 1);

        Self {
            value: self.value.clone(),
            budget: self.budget.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for CloneBreaker<T> {
    fn eq(&self, other: &Self) -> bool {
        // Skip budget (shared test state)
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for CloneBreaker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CloneBreaker").field(&self.value).finish()
    }
}
