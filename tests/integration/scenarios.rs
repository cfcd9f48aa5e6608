//! Longer scenarios combining positional inserts, deletes, and lookups.

use super::common::{forward_i32s, int_list, le};
use ringlist::{ListError, SlotState};

/// The canonical demonstration sequence the demo binary replays: a burst of
/// head/tail and positional churn whose final contents are pinned here.
#[test]
fn demonstration_sequence_reaches_the_documented_state() {
    let mut list = int_list();

    list.push_front(&le(90)).unwrap();
    list.push_back(&le(80)).unwrap();
    list.push_front(&le(-10)).unwrap();
    let pivot = list.push_front(&le(-20)).unwrap();
    list.pop_back().unwrap();
    list.pop_back().unwrap();
    let mid = list.insert_after(&le(100), pivot).unwrap();
    list.push_front(&le(-98)).unwrap();
    list.insert_before(&le(-1), mid).unwrap();
    let tail = list.tail().unwrap();
    list.delete_before(tail).unwrap();
    list.delete_before(pivot).unwrap();
    list.push_back(&le(666)).unwrap();
    list.delete_after(pivot).unwrap();

    assert_eq!(forward_i32s(&list), [-20, -10, 666]);
    list.audit().unwrap();

    for _ in 0..100 {
        list.push_front(&le(1000)).unwrap();
    }
    for _ in 0..10 {
        list.push_back(&le(-1000)).unwrap();
    }
    assert_eq!(list.len(), 113);
    list.audit().unwrap();

    assert_eq!(list.find(1).ok(), list.head());
    assert_eq!(list.find(list.len()).ok(), list.tail());
    assert_eq!(list.linear_search(&le(666)), list.find(103).ok());
}

#[test]
fn every_error_path_leaves_the_list_usable() {
    let mut list = int_list();
    let slot = list.push_back(&le(1)).unwrap();
    list.pop_back().unwrap();

    // Dead handle, bad ordinal, empty deletes: all refused, none corrupt.
    assert!(matches!(
        list.insert_after(&le(2), slot),
        Err(ListError::InvalidSlot { .. })
    ));
    assert!(matches!(list.find(1), Err(ListError::OutOfRange { .. })));
    assert_eq!(list.pop_front(), Err(ListError::Empty));
    list.audit().unwrap();

    // And the list still works afterwards.
    list.push_back(&le(3)).unwrap();
    assert_eq!(forward_i32s(&list), [3]);
}

#[test]
fn snapshot_reflects_structure_and_serializes() {
    let mut list = int_list();
    let first = list.push_back(&le(90)).unwrap();
    list.push_back(&le(80)).unwrap();
    list.insert_after(&le(70), first).unwrap();
    list.pop_back().unwrap();

    let snap = list.snapshot();
    assert_eq!(snap.size, 2);
    assert_eq!(snap.capacity, list.capacity());
    assert_eq!(snap.slots.len(), snap.capacity);
    assert_eq!(snap.slots[0].state, SlotState::Sentinel);

    let live: Vec<usize> = snap
        .slots
        .iter()
        .filter(|slot| slot.state == SlotState::Live)
        .map(|slot| slot.index)
        .collect();
    assert_eq!(live.len(), 2);
    for &slot in &live {
        assert_eq!(snap.slots[slot].value, list.value(slot).unwrap());
    }

    let json: serde_json::Value = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["size"], 2);
    assert_eq!(json["slots"][0]["state"], "sentinel");
    assert_eq!(json["slots"].as_array().unwrap().len(), snap.capacity);
}

#[test]
fn snapshot_is_detached_from_later_mutation() {
    let mut list = int_list();
    list.push_back(&le(1)).unwrap();
    let snap = list.snapshot();

    // Growth and churn after the fact must not show up in the snapshot.
    for value in 2..20 {
        list.push_back(&le(value)).unwrap();
    }
    assert_eq!(snap.size, 1);
    assert_eq!(snap.capacity, 2);
}
