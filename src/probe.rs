//! Double-hash probe sequences.
//!
//! A key's position in a slot array of capacity `m` is derived from two
//! independent polynomial hashes of its bytes:
//!
//! ```text
//! index(k) = (hash_a mod m  +  k * step) mod m      k = 0, 1, 2, ...
//! step     = 1 + (hash_b mod (m - 1))
//! ```
//!
//! `step` lies in `[1, m-1]`, so it is never zero, and because capacities
//! are prime (see [`crate::prime`]) it is always coprime to `m`. The sequence
//! therefore visits all `m` slots exactly once. [`ProbeSequence`] yields
//! exactly `m` indices and then ends, which bounds every probe loop in the
//! crate: a walk that exhausts the sequence has inspected the whole array.

/// Multipliers for the two polynomial hashes. Distinct primes above the
/// byte range keep the hashes decorrelated.
const HASH_BASE_A: u64 = 151;
const HASH_BASE_B: u64 = 163;

/// Folds the key's bytes into a 64-bit polynomial hash with the given
/// multiplier, wrapping on overflow.
fn poly_hash(key: &str, base: u64) -> u64 {
    key.bytes()
        .fold(0u64, |hash, byte| hash.wrapping_mul(base).wrapping_add(u64::from(byte)))
}

/// The slot indices a key visits in an array of `capacity` slots, in probe
/// order. Ends after `capacity` indices.
pub(crate) struct ProbeSequence {
    index: usize,
    step: usize,
    capacity: usize,
    remaining: usize,
}

pub(crate) fn probe_sequence(key: &str, capacity: usize) -> ProbeSequence {
    debug_assert!(capacity >= 2, "slot arrays hold at least two slots");
    let cap = capacity as u64;
    let index = (poly_hash(key, HASH_BASE_A) % cap) as usize;
    // Reduce the second hash into [1, capacity - 1]: a step of zero would
    // revisit a single slot forever, and a step sharing a factor with the
    // capacity would only cover part of the array.
    let step = (1 + poly_hash(key, HASH_BASE_B) % (cap - 1)) as usize;
    ProbeSequence { index, step, capacity, remaining: capacity }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.index;
        self.index = (self.index + self.step) % self.capacity;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
