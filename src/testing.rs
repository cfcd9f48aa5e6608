//! Test utilities shared across unit, property, and integration tests.
//!
//! This module is always compiled but hidden from documentation. It provides
//! canonical helpers for driving a list of little-endian `i32` elements, the
//! fixture every test suite in the crate uses.

#![doc(hidden)]

use crate::list::RingList;

/// A fresh empty list sized for `i32` elements.
pub fn int_list() -> RingList {
    RingList::for_type::<i32>().expect("list allocation failed")
}

/// Little-endian bytes of an `i32`.
pub fn le(value: i32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Decode the little-endian `i32` stored in a slot.
pub fn read_i32(bytes: &[u8]) -> i32 {
    i32::from_le_bytes(bytes.try_into().expect("expected a 4-byte element"))
}

/// Render a slot's bytes as decimal, for dump formatters.
pub fn show_i32(bytes: &[u8]) -> String {
    read_i32(bytes).to_string()
}

/// All live values in ring order.
pub fn forward_i32s(list: &RingList) -> Vec<i32> {
    list.iter().map(|(_, bytes)| read_i32(bytes)).collect()
}

/// All live slot indices in ring order.
pub fn forward_slots(list: &RingList) -> Vec<usize> {
    list.iter().map(|(slot, _)| slot).collect()
}

/// Push `values` at the tail, returning the slot handle of each.
pub fn fill_back(list: &mut RingList, values: &[i32]) -> Vec<usize> {
    values
        .iter()
        .map(|&value| list.push_back(&le(value)).expect("push_back failed"))
        .collect()
}
