//! Open-addressed table from string keys to values.

use std::fmt;
use std::mem;
use std::ops;
use std::slice;

use thiserror::Error;

use crate::prime::next_prime;
use crate::probe::probe_sequence;

/// Base capacity used when a constructor is handed 0. The actual slot
/// count is the next prime at or above the base, so the default array
/// holds `next_prime(50) = 53` slots.
pub const DEFAULT_BASE_CAPACITY: usize = 50;

/// Live-entry load percentage above which an insert grows the array.
const GROW_LOAD_PERCENT: usize = 70;

/// Live-entry load percentage below which a remove shrinks the array.
const SHRINK_LOAD_PERCENT: usize = 10;

/// Errors surfaced by the fallible container operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsertError {
    /// Every slot holds a live entry and none matches the probed key, so
    /// there is no slot left for a new one. Only a 2-slot array grown
    /// from base capacity 1 can reach this state: its doubled base
    /// re-primes to the same 2 slots, while any larger array's growth
    /// step opens new room before probing.
    #[error("capacity exhausted: all {capacity} slots hold live entries")]
    CapacityExhausted {
        /// Slot count of the array that rejected the insert.
        capacity: usize,
    },
}

/// A live key-value pair. The key is the table's own copy, made when the
/// entry was first inserted; the caller's string is never aliased.
struct Entry<V> {
    key: Box<str>,
    value: V,
}

/// One slot of the storage array.
///
/// Lookups stop at `Empty` and walk through `Tombstone`; inserts may
/// reclaim a `Tombstone` once the probe walk has proven the key absent.
enum Slot<V> {
    Empty,
    Tombstone,
    Occupied(Entry<V>),
}

/// Outcome of probing for a slot to insert into.
enum InsertSlot {
    /// The key is already present at this index.
    Existing(usize),
    /// First reclaimable slot (tombstone or empty) on the key's path.
    Free(usize),
}

/// Hash table over string keys, open-addressed with double hashing.
///
/// The slot array's length is always prime, which together with the probe
/// step choice guarantees that a key's probe sequence visits every slot
/// (see [`crate::probe`]). The array grows at 70% live load and shrinks
/// below 10%, rebuilding at the next prime above twice / half the nominal
/// base capacity.
///
/// The table owns its keys outright and owns values of type `V`. Choosing
/// `V` selects the ownership policy at the call site: an owning `V` (a
/// `Box`, a `String`, a plain struct) is dropped with its entry, while a
/// borrowed `V = &T` leaves the referent untouched on removal and
/// teardown. Displaced values always come back to the caller: replacement
/// and removal return them, and by-value iteration drains the rest.
pub struct ProbeTable<V> {
    slots: Box<[Slot<V>]>,
    base_capacity: usize,
    count: usize,
}

impl<V> ProbeTable<V> {
    /// Creates a table with the default base capacity of
    /// [`DEFAULT_BASE_CAPACITY`] (53 slots).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BASE_CAPACITY)
    }

    /// Creates a table with `next_prime(base_capacity)` slots. A base
    /// capacity of 0 selects [`DEFAULT_BASE_CAPACITY`].
    pub fn with_capacity(base_capacity: usize) -> Self {
        let base_capacity = if base_capacity == 0 {
            DEFAULT_BASE_CAPACITY
        } else {
            base_capacity
        };
        let capacity = next_prime(base_capacity);
        ProbeTable {
            slots: std::iter::repeat_with(|| Slot::Empty).take(capacity).collect(),
            base_capacity,
            count: 0,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Slot count of the storage array. Always prime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Nominal capacity that resizing doubles and halves; the slot count
    /// is the next prime at or above it.
    pub fn base_capacity(&self) -> usize {
        self.base_capacity
    }

    /// Inserts a key-value pair, growing first if the live load exceeds
    /// 70%.
    ///
    /// If the key is already present its value is replaced in place and
    /// the previous value returned; the stored key and the entry count are
    /// unchanged. A new key takes the earliest reclaimable slot on its
    /// probe path and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// [`InsertError::CapacityExhausted`] if every slot holds a live entry
    /// for some other key; the live contents are unchanged, though a growth
    /// step taken on the way in may already have rebuilt the array.
    pub fn insert(&mut self, key: &str, value: V) -> Result<Option<V>, InsertError> {
        if self.load() > GROW_LOAD_PERCENT {
            self.grow();
        }
        match self.find_insert_slot(key) {
            Some(InsertSlot::Existing(index)) => match &mut self.slots[index] {
                Slot::Occupied(entry) => Ok(Some(mem::replace(&mut entry.value, value))),
                _ => unreachable!("existing slot is occupied"),
            },
            Some(InsertSlot::Free(index)) => {
                self.slots[index] = Slot::Occupied(Entry { key: Box::from(key), value });
                self.count += 1;
                Ok(None)
            }
            None => Err(InsertError::CapacityExhausted { capacity: self.capacity() }),
        }
    }

    /// Returns a reference to the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        match &self.slots[self.find(key)?] {
            Slot::Occupied(entry) => Some(&entry.value),
            _ => None,
        }
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.find(key)?;
        match &mut self.slots[index] {
            Slot::Occupied(entry) => Some(&mut entry.value),
            _ => None,
        }
    }

    /// Returns the stored key along with the value. The key reference
    /// points at the table's own copy, not the probe argument.
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &V)> {
        match &self.slots[self.find(key)?] {
            Slot::Occupied(entry) => Some((&*entry.key, &entry.value)),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`, returning its value, after shrinking first if the
    /// live load has fallen below 10%.
    ///
    /// The vacated slot becomes a tombstone so that probe chains through
    /// it stay intact. An absent key returns `None` and leaves the live
    /// contents untouched; the shrink check still runs, so the array
    /// itself may have been rebuilt.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        if self.load() < SHRINK_LOAD_PERCENT {
            self.shrink();
        }
        let index = self.find(key)?;
        match mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied(entry) => {
                self.count -= 1;
                Some(entry.value)
            }
            _ => unreachable!("found slot is occupied"),
        }
    }

    /// Iterates over live entries in slot order. The order is arbitrary
    /// and changes across resizes.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { slots: self.slots.iter() }
    }

    /// Like [`iter`](Self::iter), with mutable value references.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut { slots: self.slots.iter_mut() }
    }

    /// Percentage of slots holding live entries. Tombstones do not count
    /// toward load; they are reclaimed by inserts and dropped by resizes.
    fn load(&self) -> usize {
        self.count * 100 / self.capacity()
    }

    fn grow(&mut self) {
        self.resize(self.base_capacity * 2);
    }

    fn shrink(&mut self) {
        // Halving bottoms out at 0, which re-enters the default base.
        self.resize(self.base_capacity / 2);
    }

    /// Rebuilds storage at `next_prime(new_base_capacity)` slots: a fresh
    /// sibling table is built, every live entry is moved into it (keys and
    /// values are moved, never copied; tombstones are dropped), and the
    /// sibling replaces `self` wholesale.
    fn resize(&mut self, new_base_capacity: usize) {
        let mut next = Self::with_capacity(new_base_capacity);
        for slot in mem::take(&mut self.slots).into_vec() {
            if let Slot::Occupied(entry) = slot {
                next.place(entry);
            }
        }
        *self = next;
    }

    /// Re-homes a live entry into a freshly built array. Keys drained from
    /// one array are unique, so only an Empty slot needs to be found.
    fn place(&mut self, entry: Entry<V>) {
        let index = probe_sequence(&entry.key, self.capacity())
            .find(|&index| matches!(self.slots[index], Slot::Empty))
            .expect("resize target holds every live entry");
        self.slots[index] = Slot::Occupied(entry);
        self.count += 1;
    }

    /// Probes for a live entry with this key: stops at the first Empty
    /// slot, walks through tombstones, and gives up once the sequence has
    /// visited the whole array.
    fn find(&self, key: &str) -> Option<usize> {
        for index in probe_sequence(key, self.capacity()) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Tombstone => {}
                Slot::Occupied(entry) => {
                    if &*entry.key == key {
                        return Some(index);
                    }
                }
            }
        }
        None
    }

    /// Probes for somewhere to put this key. The walk runs until an Empty
    /// slot or a matching live entry, remembering the first tombstone it
    /// passed; the tombstone is only reclaimed once the walk has proven
    /// the key absent, which keeps live keys unique.
    fn find_insert_slot(&self, key: &str) -> Option<InsertSlot> {
        let mut reclaimable = None;
        for index in probe_sequence(key, self.capacity()) {
            match &self.slots[index] {
                Slot::Empty => return Some(InsertSlot::Free(reclaimable.unwrap_or(index))),
                Slot::Tombstone => {
                    if reclaimable.is_none() {
                        reclaimable = Some(index);
                    }
                }
                Slot::Occupied(entry) => {
                    if &*entry.key == key {
                        return Some(InsertSlot::Existing(index));
                    }
                }
            }
        }
        reclaimable.map(InsertSlot::Free)
    }
}

impl<V> Default for ProbeTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for ProbeTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> ops::Index<&str> for ProbeTable<V> {
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is absent. [`ProbeTable::get`] is the fallible
    /// lookup.
    fn index(&self, key: &str) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

/// Borrowing iterator over live `(key, value)` entries.
pub struct Iter<'a, V> {
    slots: slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(entry) = slot {
                return Some((&*entry.key, &entry.value));
            }
        }
        None
    }
}

/// Borrowing iterator with mutable value references.
pub struct IterMut<'a, V> {
    slots: slice::IterMut<'a, Slot<V>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(entry) = slot {
                let Entry { key, value } = entry;
                return Some((&**key, value));
            }
        }
        None
    }
}

/// Draining iterator over owned `(key, value)` entries.
pub struct IntoIter<V> {
    slots: std::vec::IntoIter<Slot<V>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(entry) = slot {
                return Some((entry.key.into_string(), entry.value));
            }
        }
        None
    }
}

impl<V> IntoIterator for ProbeTable<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    /// Consumes the table, draining live entries. This is the teardown
    /// that hands values back instead of dropping them.
    fn into_iter(self) -> IntoIter<V> {
        IntoIter { slots: self.slots.into_vec().into_iter() }
    }
}

impl<'a, V> IntoIterator for &'a ProbeTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut ProbeTable<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> IterMut<'a, V> {
        self.iter_mut()
    }
}
