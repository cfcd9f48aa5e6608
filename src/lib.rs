//! Doubly-linked list embedded in three parallel arrays.
//!
//! Instead of one heap allocation per node, a [`RingList`] keeps a single
//! byte arena (`storage`) plus two index arrays (`prev`, `next`) of the same
//! slot count. Slot 0 is a reserved sentinel that anchors the structure as a
//! ring: `next[0]` is the head, `prev[0]` is the tail, and a forward walk
//! from the sentinel visits every live element and comes back. Deleted slots
//! are threaded into a free chain through `next` and reused before the
//! arrays ever grow; when the chain runs dry, capacity doubles in one
//! reallocation of all three arrays.
//!
//! Callers address elements by slot index. Indices are stable handles:
//! growth moves the arrays but never renumbers slots, so a handle stays
//! valid until its element is deleted. Raw pointers or slices into the
//! arrays do **not** survive growth; re-fetch through the handle instead.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌────────────┐     ┌──────────────┐
//! │  types.rs  │────▶│  list.rs   │────▶│   dump.rs    │
//! │  (errors,  │     │ (RingList, │     │ (Graphviz /  │
//! │  snapshot) │     │   growth)  │     │  HTML dumps) │
//! └────────────┘     └────────────┘     └──────────────┘
//!                          │
//!                          ▼
//!              ┌─────────────────────────┐
//!              │ verify.rs / contracts.rs │
//!              │  (structural invariants) │
//!              └─────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use ringlist::RingList;
//!
//! let mut list = RingList::for_type::<i32>().unwrap();
//! let first = list.push_back(&10i32.to_le_bytes()).unwrap();
//! list.push_back(&20i32.to_le_bytes()).unwrap();
//! list.push_front(&5i32.to_le_bytes()).unwrap();
//! list.insert_after(&15i32.to_le_bytes(), first).unwrap();
//!
//! let values: Vec<i32> = list
//!     .iter()
//!     .map(|(_, bytes)| i32::from_le_bytes(bytes.try_into().unwrap()))
//!     .collect();
//! assert_eq!(values, [5, 10, 15, 20]);
//! assert!(list.verify().is_ok());
//! ```
//!
//! Elements are raw bytes of a fixed width chosen at construction; the list
//! is deliberately not generic over an element type. Hosts that want typed
//! access wrap the byte slices at the boundary, as the example does with
//! `to_le_bytes`/`from_le_bytes`.

// Module declarations
pub mod contracts;
pub mod dump;
mod list;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use list::{Iter, RingList};
pub use types::{CorruptionError, ListError, ListSnapshot, SlotState, SlotView, SENTINEL};
