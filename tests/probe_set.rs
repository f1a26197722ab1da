// ProbeSet integration suite.
//
// The set shares the table's probing and resizing machinery, so these
// tests pin the membership semantics and spot-check that the resize
// schedule carries over unchanged:
// - Membership: insert reports new vs. existing; remove reports prior
//   membership; contains never mutates.
// - Sizing: same default (53 slots), same 70% grow / 10% shrink schedule.
// - Exhaustion: a fully live minimum-size array rejects new keys.
use std::collections::BTreeSet;

use probetable::{InsertError, ProbeSet};

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key{i:02}")).collect()
}

// Test: membership life cycle.
// Assumes: insert is idempotent; remove reports whether the key was live.
// Verifies: true/false returns and len tracking across the cycle.
#[test]
fn membership_round_trip() {
    let mut set = ProbeSet::new();
    assert_eq!(set.insert("alpha"), Ok(true));
    assert_eq!(set.insert("alpha"), Ok(false));
    assert_eq!(set.len(), 1);
    assert!(set.contains("alpha"));
    assert!(!set.contains("beta"));

    assert!(set.remove("alpha"));
    assert!(!set.remove("alpha"));
    assert!(set.is_empty());
    assert!(!set.contains("alpha"));
}

// Test: growth boundary matches the table's.
// Assumes: the shared engine checks load with the pre-insert count.
// Verifies: 38 members leave 53 slots in place; the 39th grows to 101.
#[test]
fn set_grows_on_the_table_schedule() {
    let keys = keys(39);
    let mut set = ProbeSet::with_capacity(0);

    for key in keys.iter().take(38) {
        assert_eq!(set.insert(key), Ok(true));
    }
    assert_eq!(set.capacity(), 53);

    assert_eq!(set.insert(&keys[38]), Ok(true));
    assert_eq!(set.capacity(), 101);
    assert_eq!(set.len(), 39);

    for key in &keys {
        assert!(set.contains(key), "lost {key} across the rebuild");
    }
}

// Test: shrink schedule matches the table's.
// Assumes: removes check load before probing; targets halve the base.
// Verifies: deleting down to 4 members lands on 29 slots with the
// survivors intact.
#[test]
fn set_shrinks_on_the_table_schedule() {
    let keys = keys(39);
    let mut set = ProbeSet::with_capacity(0);
    for key in &keys {
        set.insert(key).unwrap();
    }

    for key in keys.iter().take(35) {
        assert!(set.remove(key));
    }
    assert_eq!(set.len(), 4);
    assert_eq!(set.capacity(), 29);
    assert_eq!(set.base_capacity(), 25);

    let members: BTreeSet<&str> = set.iter().collect();
    let expected: BTreeSet<&str> = keys.iter().skip(35).map(String::as_str).collect();
    assert_eq!(members, expected);
}

// Test: capacity exhaustion surfaces through the set.
// Assumes: base 1 yields 2 slots and growing from it finds no new room.
// Verifies: the third distinct key errors; membership is unchanged.
#[test]
fn full_minimum_set_rejects_new_keys() {
    let mut set = ProbeSet::with_capacity(1);
    assert_eq!(set.insert("a"), Ok(true));
    assert_eq!(set.insert("b"), Ok(true));

    assert_eq!(
        set.insert("c"),
        Err(InsertError::CapacityExhausted { capacity: 2 })
    );
    assert_eq!(set.len(), 2);
    assert!(set.contains("a"));
    assert!(set.contains("b"));
    assert!(!set.contains("c"));

    // Evicting a resident leaves a tombstone the rejected key can take.
    assert!(set.remove("a"));
    assert_eq!(set.insert("c"), Ok(true));
    assert_eq!(set.len(), 2);
    assert!(set.contains("c"));
}

// Test: draining the set.
// Assumes: by-value iteration yields each member once as an owned String.
// Verifies: drained members equal the inserted ones.
#[test]
fn into_iter_yields_owned_members() {
    let mut set = ProbeSet::new();
    for key in ["one", "two", "three"] {
        set.insert(key).unwrap();
    }
    set.remove("two");

    let drained: BTreeSet<String> = set.into_iter().collect();
    let expected: BTreeSet<String> =
        ["one", "three"].into_iter().map(str::to_string).collect();
    assert_eq!(drained, expected);
}
