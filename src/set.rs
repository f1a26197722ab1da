//! Key-only companion to [`ProbeTable`].
//!
//! The set is a [`ProbeTable<()>`] under a membership API: same prime
//! capacities, same probe walks, same tombstone and resize behavior, with
//! the value payload degenerated to nothing.

use std::fmt;

use crate::table;
use crate::table::{InsertError, ProbeTable};

/// Hash set over string keys, open-addressed with double hashing.
pub struct ProbeSet {
    table: ProbeTable<()>,
}

impl ProbeSet {
    /// Creates a set with the default base capacity
    /// ([`crate::DEFAULT_BASE_CAPACITY`], 53 slots).
    pub fn new() -> Self {
        ProbeSet { table: ProbeTable::new() }
    }

    /// Creates a set with `next_prime(base_capacity)` slots. A base
    /// capacity of 0 selects the default.
    pub fn with_capacity(base_capacity: usize) -> Self {
        ProbeSet { table: ProbeTable::with_capacity(base_capacity) }
    }

    /// Adds a key. `Ok(true)` if it was newly added, `Ok(false)` if it was
    /// already a member; membership is idempotent.
    ///
    /// # Errors
    ///
    /// [`InsertError::CapacityExhausted`] if every slot holds a live key
    /// other than this one; the members are unchanged.
    pub fn insert(&mut self, key: &str) -> Result<bool, InsertError> {
        Ok(self.table.insert(key, ())?.is_none())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Removes a key, reporting whether it was a member.
    pub fn remove(&mut self, key: &str) -> bool {
        self.table.remove(key).is_some()
    }

    /// Number of member keys.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Slot count of the storage array. Always prime.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Nominal capacity that resizing doubles and halves.
    pub fn base_capacity(&self) -> usize {
        self.table.base_capacity()
    }

    /// Iterates over member keys in arbitrary order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.table.iter() }
    }
}

impl Default for ProbeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProbeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over member keys.
pub struct Iter<'a> {
    inner: table::Iter<'a, ()>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// Draining iterator over owned member keys.
pub struct IntoIter {
    inner: table::IntoIter<()>,
}

impl Iterator for IntoIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

impl IntoIterator for ProbeSet {
    type Item = String;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        IntoIter { inner: self.table.into_iter() }
    }
}

impl<'a> IntoIterator for &'a ProbeSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Invariant: first insert of a key reports a new member, the second
    /// reports an existing one, and membership stays single.
    #[test]
    fn insert_is_idempotent() {
        let mut set = ProbeSet::new();
        assert_eq!(set.insert("alpha"), Ok(true));
        assert_eq!(set.insert("alpha"), Ok(false));
        assert!(set.contains("alpha"));
        assert_eq!(set.len(), 1);
    }

    /// Invariant: removal reports prior membership and leaves the key out.
    #[test]
    fn remove_reports_membership() {
        let mut set = ProbeSet::new();
        set.insert("alpha").unwrap();
        assert!(set.remove("alpha"));
        assert!(!set.contains("alpha"));
        assert!(!set.remove("alpha"));
        assert!(set.is_empty());
    }

    /// Invariant: an empty set contains nothing.
    #[test]
    fn empty_set_contains_nothing() {
        let set = ProbeSet::new();
        assert!(!set.contains("anything"));
        assert_eq!(set.len(), 0);
    }

    /// Invariant: the set sizes its array exactly like the table.
    #[test]
    fn capacity_matches_table_rules() {
        assert_eq!(ProbeSet::new().capacity(), 53);
        assert_eq!(ProbeSet::with_capacity(0).capacity(), 53);
        assert_eq!(ProbeSet::with_capacity(10).capacity(), 11);
        assert_eq!(ProbeSet::with_capacity(10).base_capacity(), 10);
    }

    /// Invariant: iteration yields each member exactly once.
    #[test]
    fn iter_yields_members_once() {
        let mut set = ProbeSet::new();
        for key in ["a", "b", "c"] {
            set.insert(key).unwrap();
        }
        set.remove("b");

        let seen: BTreeSet<&str> = set.iter().collect();
        assert_eq!(seen, BTreeSet::from(["a", "c"]));
    }

    /// Invariant: by-value iteration drains owned keys.
    #[test]
    fn into_iter_drains_keys() {
        let mut set = ProbeSet::new();
        set.insert("one").unwrap();
        set.insert("two").unwrap();

        let drained: BTreeSet<String> = set.into_iter().collect();
        assert_eq!(drained, BTreeSet::from(["one".to_string(), "two".to_string()]));
    }

    /// Invariant: `Debug` renders members as a set.
    #[test]
    fn debug_formats_as_set() {
        let mut set = ProbeSet::new();
        set.insert("m").unwrap();
        assert_eq!(format!("{set:?}"), r#"{"m"}"#);
    }
}
