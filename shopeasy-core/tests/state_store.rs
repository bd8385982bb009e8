use std::sync::Arc;

use shopeasy_core::{lock_state, StateStore};

#[test]
fn get_or_create_is_identity_stable() {
    let store = StateStore::new();
    let first = store.get_or_create("u1");
    let second = store.get_or_create("u1");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(lock_state(&first).user_id, "u1");
}

#[test]
fn fresh_record_is_zero_valued() {
    let store = StateStore::new();
    let handle = store.get_or_create("u1");
    let state = lock_state(&handle).clone();
    assert_eq!(state.last_intent, None);
    assert_eq!(state.last_order_id, None);
    assert_eq!(state.message_count, 0);
}

#[test]
fn update_sets_fields_and_counts() {
    let store = StateStore::new();
    let handle = store.get_or_create("u1");

    lock_state(&handle).update(Some("check_order"), Some("ORD-99"));
    {
        let state = lock_state(&handle);
        assert_eq!(state.last_intent.as_deref(), Some("check_order"));
        assert_eq!(state.last_order_id.as_deref(), Some("ORD-99"));
        assert_eq!(state.message_count, 1);
    }

    // Partial update overwrites intent but keeps the order id.
    lock_state(&handle).update(Some("return_request"), None);
    let state = lock_state(&handle);
    assert_eq!(state.last_intent.as_deref(), Some("return_request"));
    assert_eq!(state.last_order_id.as_deref(), Some("ORD-99"));
    assert_eq!(state.message_count, 2);
}

#[test]
fn empty_values_never_overwrite_state() {
    let store = StateStore::new();
    let handle = store.get_or_create("u1");

    // Empty strings count as a message but set nothing.
    lock_state(&handle).update(Some(""), Some(""));
    {
        let state = lock_state(&handle);
        assert_eq!(state.last_intent, None);
        assert_eq!(state.last_order_id, None);
        assert_eq!(state.message_count, 1);
    }

    // A stored value survives a later empty update.
    lock_state(&handle).update(Some("check_order"), Some("ORD-9"));
    lock_state(&handle).update(Some(""), Some(""));
    let state = lock_state(&handle);
    assert_eq!(state.last_intent.as_deref(), Some("check_order"));
    assert_eq!(state.last_order_id.as_deref(), Some("ORD-9"));
}

#[test]
fn message_count_never_decreases() {
    let store = StateStore::new();
    let handle = store.get_or_create("u1");
    let mut previous = 0;
    for _ in 0..10 {
        lock_state(&handle).update(None, None);
        let count = lock_state(&handle).message_count;
        assert!(count >= previous);
        previous = count;
    }
}

#[test]
fn remove_deletes_and_tolerates_missing() {
    let store = StateStore::new();
    let handle = store.get_or_create("u1");
    lock_state(&handle).update(None, Some("ORD-1"));

    store.remove("u1");
    store.remove("never-seen");

    // A re-created record starts from zero.
    let fresh = store.get_or_create("u1");
    assert!(!Arc::ptr_eq(&handle, &fresh));
    assert_eq!(lock_state(&fresh).message_count, 0);
}

#[test]
fn snapshot_is_a_point_in_time_copy() {
    let store = StateStore::new();
    let a = store.get_or_create("a");
    store.get_or_create("b");
    lock_state(&a).update(Some("check_order"), Some("ORD-7"));

    let snapshot = store.snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot["a"].last_order_id.as_deref(), Some("ORD-7"));
    assert_eq!(snapshot["b"].message_count, 0);
    assert!(!snapshot.contains_key("c"));

    // Mutations after the call must not leak into the copy.
    lock_state(&a).update(None, Some("ORD-8"));
    assert_eq!(snapshot["a"].last_order_id.as_deref(), Some("ORD-7"));
}
