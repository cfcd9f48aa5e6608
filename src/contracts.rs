//! Debug-build contracts wrapping the structural checks.
//!
//! Every mutating operation on the list calls [`check_well_formed`] on entry
//! and exit. The checks:
//!
//! 1. Are **zero-cost in release builds** (compiled behind
//!    `cfg!(debug_assertions)`)
//! 2. Fail **loudly**: a violation panics instead of returning, because a
//!    structurally inconsistent ring cannot be repaired and must not be
//!    operated on further
//!
//! Full verification walks every slot, O(capacity), which is why it is kept
//! out of release-path hot loops.

use crate::list::RingList;

/// Assert the cheap structural check (debug builds only).
///
/// # Panics (debug builds only)
///
/// Panics if [`crate::verify::verify`] reports a violation.
#[inline]
pub fn check_verified(list: &RingList) {
    if cfg!(debug_assertions) {
        if let Err(defect) = crate::verify::verify(list) {
            panic!("structural contract violated: {}", defect);
        }
    }
}

/// Assert the deep structural check (debug builds only).
///
/// # Panics (debug builds only)
///
/// Panics if [`crate::verify::audit`] reports a violation.
#[inline]
pub fn check_well_formed(list: &RingList) {
    if cfg!(debug_assertions) {
        if let Err(defect) = crate::verify::audit(list) {
            panic!("structural contract violated: {}", defect);
        }
    }
}
