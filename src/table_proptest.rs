#![cfg(test)]

//! Model-based property tests: random operation sequences over a bounded
//! key pool, checked step-by-step against `std::collections::HashMap`.
//! The pool is small enough that shrunk arrays collide constantly, which
//! keeps tombstone walks and both resize directions on the hot path.

use std::collections::{BTreeMap, HashMap};

use proptest::prelude::*;

use crate::prime::is_prime;
use crate::table::{InsertError, ProbeTable};

/// Pool-indexed keys shrink far better than free-form strings.
fn pool_key(index: usize) -> String {
    format!("k{index:02}")
}

proptest! {
    /// Random insert/remove/get/contains sequences agree with the model
    /// at every step; the slot count stays prime throughout.
    #[test]
    fn prop_table_matches_hashmap_model(
        ops in proptest::collection::vec((0u8..=3u8, 0usize..60usize, any::<i32>()), 1..300),
    ) {
        let mut table: ProbeTable<i32> = ProbeTable::with_capacity(0);
        let mut model: HashMap<String, i32> = HashMap::new();

        for (op, key_index, value) in ops {
            let key = pool_key(key_index);
            match op {
                0 => match table.insert(&key, value) {
                    Ok(previous) => {
                        prop_assert_eq!(previous, model.insert(key.clone(), value));
                    }
                    Err(InsertError::CapacityExhausted { capacity }) => {
                        // Only a fully live array reports exhaustion, and
                        // the live contents must be untouched by it.
                        prop_assert_eq!(capacity, table.capacity());
                        prop_assert_eq!(table.len(), table.capacity());
                        prop_assert!(!model.contains_key(&key));
                    }
                },
                1 => {
                    prop_assert_eq!(table.remove(&key), model.remove(&key));
                }
                2 => {
                    prop_assert_eq!(table.get(&key), model.get(&key));
                }
                _ => {
                    prop_assert_eq!(table.contains_key(&key), model.contains_key(&key));
                }
            }
            prop_assert_eq!(table.len(), model.len());
            prop_assert!(is_prime(table.capacity()));
            prop_assert!(table.len() <= table.capacity());
        }

        let seen: BTreeMap<String, i32> =
            table.iter().map(|(key, value)| (key.to_string(), *value)).collect();
        let expected: BTreeMap<String, i32> =
            model.iter().map(|(key, value)| (key.clone(), *value)).collect();
        prop_assert_eq!(seen, expected);
    }

    /// A minimum-size table keeps agreeing with the model across
    /// exhaustion errors: a rejected insert leaves the live contents
    /// intact, and a later attempt gets in once growth has found room.
    #[test]
    fn prop_tiny_table_matches_model_through_exhaustion(
        ops in proptest::collection::vec((0u8..=1u8, 0usize..4usize, any::<i32>()), 1..60),
    ) {
        let mut table: ProbeTable<i32> = ProbeTable::with_capacity(1);
        let mut model: HashMap<String, i32> = HashMap::new();

        for (op, key_index, value) in ops {
            let key = pool_key(key_index);
            match op {
                0 => match table.insert(&key, value) {
                    Ok(previous) => {
                        prop_assert_eq!(previous, model.insert(key.clone(), value));
                    }
                    Err(InsertError::CapacityExhausted { .. }) => {
                        prop_assert_eq!(table.len(), table.capacity());
                        prop_assert!(!model.contains_key(&key));
                    }
                },
                _ => {
                    prop_assert_eq!(table.remove(&key), model.remove(&key));
                }
            }
            prop_assert_eq!(table.len(), model.len());
            prop_assert!(is_prime(table.capacity()));
        }

        for index in 0..4 {
            let key = pool_key(index);
            prop_assert_eq!(table.get(&key), model.get(&key));
        }
    }
}
