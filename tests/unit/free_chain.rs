//! Free-chain discipline: marking, threading, and reuse order.

use super::common::{fill_back, forward_i32s, free_chain, int_list, le};
use ringlist::{RingList, SENTINEL};

#[test]
fn freed_slots_are_reused_most_recent_first() {
    let mut list = int_list();
    let slots = fill_back(&mut list, &[1, 2, 3, 4, 5]);

    // Free the second and fourth elements; the chain is a stack.
    list.delete_after(slots[0]).unwrap(); // removes slots[1]
    list.delete_before(slots[4]).unwrap(); // removes slots[3]
    assert_eq!(free_chain(&list)[..2], [slots[3], slots[1]]);

    assert_eq!(list.push_back(&le(6)).unwrap(), slots[3]);
    assert_eq!(list.push_back(&le(7)).unwrap(), slots[1]);
    assert_eq!(forward_i32s(&list), [1, 3, 5, 6, 7]);
}

#[test]
fn is_free_flips_with_the_slot_lifecycle() {
    let mut list = int_list();
    let slot = list.push_back(&le(9)).unwrap();
    assert!(list.is_live(slot));
    assert!(!list.is_free(slot));

    list.pop_back().unwrap();
    assert!(!list.is_live(slot));
    assert!(list.is_free(slot));

    // Reused slot becomes live again.
    assert_eq!(list.push_front(&le(8)).unwrap(), slot);
    assert!(list.is_live(slot));
}

#[test]
fn free_slots_hide_their_chain_links() {
    let mut list = int_list();
    let slot = list.push_back(&le(1)).unwrap();
    list.pop_back().unwrap();
    assert_eq!(list.next_of(slot), None);
    assert_eq!(list.prev_of(slot), None);
    assert_eq!(list.value(slot), None);
}

#[test]
fn chain_is_empty_exactly_when_the_list_is_full() {
    let mut list = RingList::with_capacity(4, 4).unwrap();
    fill_back(&mut list, &[1, 2, 3]);
    assert_eq!(list.free_head(), SENTINEL);
    assert!(free_chain(&list).is_empty());
    list.audit().unwrap();
}

#[test]
fn chain_length_always_accounts_for_every_dead_slot() {
    let mut list = int_list();
    let slots = fill_back(&mut list, &[1, 2, 3, 4, 5, 6, 7]);
    for slot in slots.iter().take(4) {
        // Each deleted element must land on the chain.
        let before = free_chain(&list).len();
        list.delete_before(list.next_of(*slot).unwrap()).unwrap();
        assert_eq!(free_chain(&list).len(), before + 1);
        list.audit().unwrap();
    }
    assert_eq!(
        free_chain(&list).len(),
        list.capacity() - 1 - list.len()
    );
}
