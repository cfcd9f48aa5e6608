// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core types shared across the crate: slot constants, the error taxonomy,
//! and the read-only snapshot handed to external tooling.
//!
//! Two error families with very different contracts:
//!
//! - [`ListError`] - usage-level outcomes a caller can recover from
//!   (allocation failure, deleting past the ends, bad ordinals, dead
//!   anchors). The list is always left in its last valid state.
//! - [`CorruptionError`] - a structural invariant no longer holds. This is
//!   never a usage error: either a caller mutated adopted arrays out from
//!   under the list, or there is a defect in the list itself. The contract
//!   layer panics on it in debug builds, because a broken ring cannot be
//!   locally repaired and chasing its indices risks going out of bounds.

use serde::Serialize;
use std::collections::TryReserveError;
use std::fmt;

/// The reserved anchor slot. Its forward link is the true head and its
/// backward link the true tail; it never holds a live element and is never a
/// valid delete target. It *is* a valid insertion anchor:
/// `insert_after(value, SENTINEL)` is head insertion.
pub const SENTINEL: usize = 0;

/// Marker stored in `prev` for slots on the free chain. `usize::MAX` can
/// never collide with a real slot index, so "is free" is a single compare.
pub(crate) const FREE_MARK: usize = usize::MAX;

/// Recoverable operation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// An array allocation or reallocation failed. The attempted mutation was
    /// abandoned and the list keeps its prior contents and capacity.
    Allocation(TryReserveError),
    /// A delete was requested but the slot in that direction is the ring
    /// anchor: the list is empty, or the anchor is already at that end.
    Empty,
    /// Ordinal position outside `1..=len()`.
    OutOfRange { position: usize, size: usize },
    /// The slot is out of bounds or on the free chain, so it cannot anchor an
    /// operation.
    InvalidSlot { slot: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Allocation(inner) => {
                write!(f, "slot array allocation failed: {}", inner)
            }
            ListError::Empty => {
                write!(f, "no live element to delete at the requested position")
            }
            ListError::OutOfRange { position, size } => {
                write!(f, "ordinal position {} outside 1..={}", position, size)
            }
            ListError::InvalidSlot { slot } => {
                write!(f, "slot {} is not live in this list", slot)
            }
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListError::Allocation(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<TryReserveError> for ListError {
    fn from(inner: TryReserveError) -> Self {
        ListError::Allocation(inner)
    }
}

/// Structural invariant violations reported by [`verify`](crate::verify::verify)
/// and [`audit`](crate::verify::audit).
///
/// The first eight variants are the cheap shape checks; the rest require the
/// deep audit walk over the ring and the free chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorruptionError {
    /// Storage array length disagrees with `capacity * elem_width`.
    StorageLength { len: usize, expected: usize },
    /// `prev` array length disagrees with `capacity`.
    PrevLength { len: usize, expected: usize },
    /// `next` array length disagrees with `capacity`.
    NextLength { len: usize, expected: usize },
    /// A `next` entry points outside the arrays.
    NextOutOfBounds {
        slot: usize,
        next: usize,
        capacity: usize,
    },
    /// The free chain entry point is outside the arrays.
    FreeHeadOutOfBounds { free_head: usize, capacity: usize },
    /// Capacity of zero: not even the sentinel slot exists.
    NoCapacity,
    /// Recorded size cannot fit in the arrays (the sentinel takes one slot).
    SizeExceedsCapacity { size: usize, capacity: usize },
    /// Forward traversal from the sentinel never returns to it.
    RingBroken { steps: usize, reached: usize },
    /// A slot reachable through the ring carries the free marker.
    FreeSlotInRing { slot: usize },
    /// `prev[slot]` does not point back at the slot it was reached from.
    LinkMismatch { slot: usize, via: usize },
    /// A slot reachable through the free chain is not marked free, or the
    /// chain loops.
    FreeChainCorrupt { slot: usize },
    /// The free chain length disagrees with `capacity - size - 1`.
    FreeCountMismatch { counted: usize, expected: usize },
    /// The number of slots on the ring disagrees with the recorded size.
    SizeMismatch { counted: usize, recorded: usize },
}

impl fmt::Display for CorruptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorruptionError::StorageLength { len, expected } => {
                write!(f, "storage length {} != {} expected", len, expected)
            }
            CorruptionError::PrevLength { len, expected } => {
                write!(f, "prev length {} != capacity {}", len, expected)
            }
            CorruptionError::NextLength { len, expected } => {
                write!(f, "next length {} != capacity {}", len, expected)
            }
            CorruptionError::NextOutOfBounds {
                slot,
                next,
                capacity,
            } => {
                write!(f, "next[{}] = {} >= capacity {}", slot, next, capacity)
            }
            CorruptionError::FreeHeadOutOfBounds {
                free_head,
                capacity,
            } => {
                write!(f, "free head {} >= capacity {}", free_head, capacity)
            }
            CorruptionError::NoCapacity => {
                write!(f, "capacity is 0, the sentinel slot is missing")
            }
            CorruptionError::SizeExceedsCapacity { size, capacity } => {
                write!(f, "size {} > capacity {} - 1", size, capacity)
            }
            CorruptionError::RingBroken { steps, reached } => {
                write!(
                    f,
                    "ring not closed: at slot {} after {} forward steps",
                    reached, steps
                )
            }
            CorruptionError::FreeSlotInRing { slot } => {
                write!(f, "slot {} is on the ring but marked free", slot)
            }
            CorruptionError::LinkMismatch { slot, via } => {
                write!(f, "prev[{}] does not point back at {}", slot, via)
            }
            CorruptionError::FreeChainCorrupt { slot } => {
                write!(f, "free chain reaches slot {} which is not free", slot)
            }
            CorruptionError::FreeCountMismatch { counted, expected } => {
                write!(
                    f,
                    "free chain holds {} slots, expected {}",
                    counted, expected
                )
            }
            CorruptionError::SizeMismatch { counted, recorded } => {
                write!(
                    f,
                    "ring holds {} slots but size records {}",
                    counted, recorded
                )
            }
        }
    }
}

impl std::error::Error for CorruptionError {}

/// Classification of a slot in a [`ListSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// Slot 0, the ring anchor.
    Sentinel,
    /// Holds an element and participates in the ring.
    Live,
    /// On the free chain, awaiting reuse.
    Free,
}

/// One slot as seen by external tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub index: usize,
    /// `None` for slots on the free chain (their `prev` holds the marker).
    pub prev: Option<usize>,
    /// Ring successor for live slots and the sentinel; chain successor for
    /// free slots.
    pub next: usize,
    pub state: SlotState,
    /// Raw element bytes. Free and sentinel slots expose whatever the arena
    /// currently holds there; only `Live` values are meaningful.
    pub value: Vec<u8>,
}

/// Read-only structure dump consumed by the visualizer and other diagnostics.
///
/// A snapshot is detached from the list: taking one copies links and element
/// bytes, so later mutations (including growth) cannot invalidate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSnapshot {
    pub capacity: usize,
    pub size: usize,
    pub free_head: usize,
    pub elem_width: usize,
    pub slots: Vec<SlotView>,
}
