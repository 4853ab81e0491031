// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::VectorError;
use crate::raw_buffer::RawBuffer;

#[test]
fn test_empty_has_no_capacity() {
    let buf = RawBuffer::<u64>::empty();

    assert_eq!(buf.capacity(), 0);
    assert!(!buf.as_ptr().is_null());
    assert!(buf.as_ptr().is_aligned());
}

#[test]
fn test_allocate_zero_is_empty() {
    let buf = RawBuffer::<u64>::allocate(0).expect("Failed to allocate(0)");
    assert_eq!(buf.capacity(), 0);
}

#[test]
fn test_allocate_exact_capacity() {
    let buf = RawBuffer::<u64>::allocate(13).expect("Failed to allocate(13)");
    assert_eq!(buf.capacity(), 13);
}

#[test]
fn test_allocate_overflow() {
    let result = RawBuffer::<u64>::allocate(usize::MAX);
    assert!(matches!(result, Err(VectorError::CapacityOverflow)));
}

#[test]
fn test_allocate_zero_sized_type() {
    let buf = RawBuffer::<()>::allocate(usize::MAX).expect("Failed to allocate ZST buffer");
    assert_eq!(buf.capacity(), usize::MAX);
}

#[test]
fn test_write_then_read_slot() {
    let mut buf = RawBuffer::<u32>::allocate(2).expect("Failed to allocate(2)");

    unsafe {
        buf.as_mut_ptr().add(1).write(42);
        assert_eq!(buf.as_ptr().add(1).read(), 42);
    }
}
