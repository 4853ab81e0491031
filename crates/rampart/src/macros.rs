// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`Vector`](crate::Vector) from a list of values or a fill expression.
///
/// - `vector![a, b, c]` holds the values in order with capacity equal to their count.
/// - `vector![value; count]` holds `count` clones of `value`.
/// - `vector![]` is an empty vector with no allocation.
///
/// ```rust
/// use rampart::vector;
///
/// let list = vector![1, 2, 3];
/// assert_eq!(list.capacity(), 3);
///
/// let filled = vector![0u8; 4];
/// assert_eq!(filled, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($elem:expr; $count:expr) => {
        $crate::Vector::from_elem($elem, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Vector::from([$($value),+])
    };
}
