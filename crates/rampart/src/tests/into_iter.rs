// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::format;
use alloc::vec::Vec;

use rampart_test_utils::DropCounter;

use crate::{Vector, vector};

#[test]
fn test_into_iter_yields_in_order() {
    let vec = vector![1, 2, 3];
    let collected: Vec<_> = vec.into_iter().collect();

    assert_eq!(collected, [1, 2, 3]);
}

#[test]
fn test_into_iter_from_both_ends() {
    let mut iter = vector![1, 2, 3, 4].into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.as_slice(), [2, 3]);
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_into_iter_empty() {
    let vec: Vector<u8> = Vector::new();
    let mut iter = vec.into_iter();

    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_into_iter_drops_remaining_once() {
    let counter = DropCounter::new();
    let vec: Vector<_> = (0u8..4).map(|i| counter.track(i)).collect();

    let mut iter = vec.into_iter();
    let first = iter.next().expect("Failed to get first element");
    assert_eq!(counter.count(), 0);

    drop(iter);
    assert_eq!(counter.count(), 3);

    drop(first);
    assert_eq!(counter.count(), 4);
}

#[test]
fn test_into_iter_debug() {
    let mut iter = vector![1, 2, 3].into_iter();
    iter.next();

    assert_eq!(format!("{iter:?}"), "IntoIter([2, 3])");
}

#[test]
fn test_into_iter_zero_sized_type() {
    let mut vec = Vector::new();
    for _ in 0..5 {
        vec.push(());
    }

    assert_eq!(vec.into_iter().count(), 5);
}
