//! probetable: an open-addressed string table and set using double
//! hashing over prime-sized storage, with tombstone deletion and
//! load-driven resizing.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small, embeddable associative container whose probing and
//!   resizing behavior is fully predictable, built in layers that can be
//!   reasoned about independently.
//! - Layers:
//!   - prime: capacity selection; every slot array is sized to
//!     `next_prime(base_capacity)`.
//!   - probe: double-hash probe sequences; an iterator that yields each
//!     slot index exactly once for a given key and capacity.
//!   - ProbeTable<V>: the open-addressing engine: slot states, insert /
//!     lookup / remove, tombstones, grow and shrink.
//!   - ProbeSet: membership surface over a `ProbeTable<()>`.
//!
//! Probe math
//! - Two polynomial hashes of the key's bytes, with distinct prime
//!   multipliers, yield the start index and the step:
//!   `index(k) = (h_a mod m + k * step) mod m`,
//!   `step = 1 + (h_b mod (m - 1))`.
//! - `m` is prime and `step` is in `[1, m-1]`, so the walk is a
//!   permutation of the slots: every probe loop terminates after at most
//!   `m` visits, with no unreachable live entry.
//!
//! Slot states and deletion
//! - Each slot is `Empty`, `Tombstone`, or `Occupied`: an explicit enum,
//!   not a sentinel value. Lookups stop at `Empty` and walk through
//!   `Tombstone`, because a live entry may sit past one.
//! - Removal tombstones the slot. Inserts reclaim the earliest tombstone
//!   on their path, but only after the walk has proven the key absent, so
//!   live keys stay unique.
//!
//! Resizing
//! - Inserts grow the array when live load passes 70%; removals shrink it
//!   when load drops under 10%. Targets are twice / half the nominal base
//!   capacity, re-primed; a shrink bottoming out at 0 re-enters the
//!   default base of 50.
//! - A resize builds a sibling table and moves every live entry into it;
//!   tombstones are dropped on the floor. The sibling then replaces the
//!   table wholesale. Keys and values are moved, never cloned.
//!
//! Ownership
//! - The table owns an independent copy of each key and owns its values.
//!   The ownership policy for the payload is the caller's choice of `V`:
//!   owning types are dropped with their entries, borrowed `V = &T`
//!   payloads release nothing. Replaced and removed values are returned;
//!   by-value iteration drains the rest.
//!
//! Constraints
//! - Single-threaded use: no interior mutability and no internal
//!   synchronization; mutation requires `&mut self`. Sharing across
//!   threads needs external locking chosen by the embedder.
//! - String keys only; lookups take `&str` and never allocate.
//! - Only minimum-size arrays (2 or 3 slots) can fill completely; a
//!   fresh key then grows the array first, and only one shape cannot
//!   open room that way: base capacity 1 re-primes to the same 2 slots,
//!   and the insert reports [`InsertError::CapacityExhausted`] instead
//!   of spinning. Larger arrays never fill because growth triggers at
//!   70% load.
//!
//! Notes and non-goals
//! - Iteration order is slot order: arbitrary, and reshuffled by resizes.
//! - No incremental rehashing; resizes are stop-the-world rebuilds.
//! - No thread-safe variant, no persistence, no non-string keys.
//! - Public API surface is `ProbeTable`, `ProbeSet`, and their iterators;
//!   the prime and probe layers are implementation details.

mod prime;
mod probe;
pub mod set;
pub mod table;
mod table_proptest;

// Public surface
pub use set::ProbeSet;
pub use table::{DEFAULT_BASE_CAPACITY, InsertError, ProbeTable};
