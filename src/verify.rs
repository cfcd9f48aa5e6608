// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural verification for [`RingList`].
//!
//! Two tiers, both read-only:
//!
//! - [`verify`] - the cheap shape check: array lengths agree with the
//!   recorded capacity and element width, every forward link and the
//!   free-chain entry are in bounds, the recorded size fits, and forward
//!   traversal from the sentinel closes the ring.
//! - [`audit`] - everything `verify` checks, plus the full walk: mutual
//!   `prev`/`next` consistency along the ring, free-marker discipline, and
//!   the slot accounting that proves ring and free chain partition the
//!   arrays between them.
//!
//! A failure from either is not a usage error. It means the arrays have been
//! mutated out from under the list (possible only through
//! [`RingList::from_parts`] input) or the list itself has a defect. Callers
//! should treat it as fatal; there is no local repair for a broken ring.

use crate::list::RingList;
use crate::types::{CorruptionError, FREE_MARK, SENTINEL};

/// Cheap structural check, O(capacity).
///
/// Verifying twice with no mutation in between returns the same result: the
/// check reads the arrays and nothing else.
pub fn verify(list: &RingList) -> Result<(), CorruptionError> {
    let capacity = list.capacity;
    if capacity == 0 {
        return Err(CorruptionError::NoCapacity);
    }
    if list.storage.len() != capacity * list.elem_width {
        return Err(CorruptionError::StorageLength {
            len: list.storage.len(),
            expected: capacity * list.elem_width,
        });
    }
    if list.prev.len() != capacity {
        return Err(CorruptionError::PrevLength {
            len: list.prev.len(),
            expected: capacity,
        });
    }
    if list.next.len() != capacity {
        return Err(CorruptionError::NextLength {
            len: list.next.len(),
            expected: capacity,
        });
    }
    for (slot, &next) in list.next.iter().enumerate() {
        if next >= capacity {
            return Err(CorruptionError::NextOutOfBounds {
                slot,
                next,
                capacity,
            });
        }
    }
    if list.free_head >= capacity {
        return Err(CorruptionError::FreeHeadOutOfBounds {
            free_head: list.free_head,
            capacity,
        });
    }
    if list.size > capacity - 1 {
        return Err(CorruptionError::SizeExceedsCapacity {
            size: list.size,
            capacity,
        });
    }

    // Ring closure: following next from the sentinel must come back to it.
    // More than capacity steps without returning means the walk entered a
    // cycle that skips the sentinel.
    let mut slot = list.next[SENTINEL];
    let mut steps = 1;
    while slot != SENTINEL {
        if steps > capacity {
            return Err(CorruptionError::RingBroken {
                steps,
                reached: slot,
            });
        }
        slot = list.next[slot];
        steps += 1;
    }
    Ok(())
}

/// Deep structural check, O(capacity).
///
/// Extends [`verify`] with the link-consistency and accounting invariants.
/// One direction of link checking per ring edge suffices: once
/// `prev[next[i]] == i` holds around the whole closed ring,
/// `next[prev[j]] == j` follows for every ring slot.
pub fn audit(list: &RingList) -> Result<(), CorruptionError> {
    verify(list)?;

    // Walk the ring once, checking each edge's back-link and counting.
    let mut slot = SENTINEL;
    let mut counted = 0;
    loop {
        let next = list.next[slot];
        if next != SENTINEL && list.prev[next] == FREE_MARK {
            return Err(CorruptionError::FreeSlotInRing { slot: next });
        }
        if list.prev[next] != slot {
            return Err(CorruptionError::LinkMismatch { slot: next, via: slot });
        }
        slot = next;
        if slot == SENTINEL {
            break;
        }
        counted += 1;
    }
    if counted != list.size {
        return Err(CorruptionError::SizeMismatch {
            counted,
            recorded: list.size,
        });
    }

    // Walk the free chain: every slot marked, no cycles, exact length.
    let mut counted_free = 0;
    let mut slot = list.free_head;
    while slot != SENTINEL {
        if counted_free >= list.capacity || list.prev[slot] != FREE_MARK {
            return Err(CorruptionError::FreeChainCorrupt { slot });
        }
        counted_free += 1;
        slot = list.next[slot];
    }
    let expected = list.capacity - 1 - list.size;
    if counted_free != expected {
        return Err(CorruptionError::FreeCountMismatch {
            counted: counted_free,
            expected,
        });
    }

    // Ring slots carry real back-links, free slots carry the marker, and the
    // two counts cover every slot but the sentinel, so no slot can be on
    // both structures or on neither.
    Ok(())
}
