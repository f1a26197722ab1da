//! Prime capacity selection.
//!
//! Double hashing only covers every slot when the step size is coprime to
//! the slot count, so storage arrays are always sized to a prime. Resizes
//! pick the smallest prime at or above the requested base capacity.

/// Smallest prime greater than or equal to `n`. Anything below 2 maps to 2.
pub(crate) fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

/// Trial division by 2 and odd divisors up to the integer square root.
/// The `divisor <= n / divisor` bound avoids overflow near `usize::MAX`.
pub(crate) fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
