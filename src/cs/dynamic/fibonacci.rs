//! Fibonacci numbers, F(0) = 0, F(1) = 1, F(n) = F(n - 1) + F(n - 2).
//!
//! Two strategies are provided side by side: a top-down recursion that caches
//! subproblems and a bottom-up fill of a table. Both return `u128`, which holds
//! every term up to [`MAX_FIBONACCI_U128_INDEX`]. Use [`fibonacci_big`] past that.

use std::collections::HashMap;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Largest `n` for which F(n) fits in a `u128`.
pub const MAX_FIBONACCI_U128_INDEX: usize = 186;

fn check_index(n: usize) -> Result<()> {
    if n > MAX_FIBONACCI_U128_INDEX {
        log::warn!("rejecting F({n}): exceeds u128 range");
        return Err(Error::FibonacciOverflow { n });
    }
    Ok(())
}

/// A Fibonacci cache owned by the caller.
///
/// Results computed by one [`FibonacciMemo::get`] call are reused by later
/// calls on the same value, so a run of F(0), F(1), ... F(k) costs O(k) in
/// total. Separate instances never share state.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::fibonacci::FibonacciMemo;
///
/// let mut memo = FibonacciMemo::new();
/// assert_eq!(memo.get(10).unwrap(), 55);
/// assert_eq!(memo.get(9).unwrap(), 34); // served from the cache
/// ```
#[derive(Debug, Clone, Default)]
pub struct FibonacciMemo {
    cache: HashMap<usize, u128>,
}

impl FibonacciMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns F(`n`), computing and caching any missing terms.
    pub fn get(&mut self, n: usize) -> Result<u128> {
        check_index(n)?;
        Ok(memoized(n, &mut self.cache))
    }

    /// Number of cached terms. Base cases are never stored.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

// Callers guarantee n <= MAX_FIBONACCI_U128_INDEX, so neither the additions
// nor the recursion depth can run away.
fn memoized(n: usize, cache: &mut HashMap<usize, u128>) -> u128 {
    if n < 2 {
        return n as u128;
    }
    if let Some(&value) = cache.get(&n) {
        log::trace!("fibonacci cache hit for F({n})");
        return value;
    }

    let value = memoized(n - 1, cache) + memoized(n - 2, cache);
    cache.insert(n, value);
    value
}

/// Computes F(`n`) top-down, remembering each subproblem in a cache that
/// lives only for this call.
///
/// Returns [`Error::FibonacciOverflow`] when `n > MAX_FIBONACCI_U128_INDEX`.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::fibonacci::fibonacci_memoized;
///
/// assert_eq!(fibonacci_memoized(0).unwrap(), 0);
/// assert_eq!(fibonacci_memoized(10).unwrap(), 55);
/// assert!(fibonacci_memoized(500).is_err());
/// ```
pub fn fibonacci_memoized(n: usize) -> Result<u128> {
    FibonacciMemo::new().get(n)
}

/// Computes F(`n`) bottom-up by filling a table of `n + 1` entries.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::fibonacci::fibonacci_tabulated;
///
/// assert_eq!(fibonacci_tabulated(1).unwrap(), 1);
/// assert_eq!(fibonacci_tabulated(20).unwrap(), 6765);
/// ```
pub fn fibonacci_tabulated(n: usize) -> Result<u128> {
    check_index(n)?;
    if n < 2 {
        return Ok(n as u128);
    }

    let mut table = vec![0_u128; n + 1];
    table[1] = 1;
    for i in 2..=n {
        table[i] = table[i - 1] + table[i - 2];
    }

    log::debug!("fibonacci table filled up to F({n})");
    Ok(table[n])
}

/// Returns the first `count` terms, F(0) through F(count - 1).
pub fn fibonacci_sequence(count: usize) -> Result<Vec<u128>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    check_index(count - 1)?;

    let mut memo = FibonacciMemo::new();
    (0..count).map(|i| memo.get(i)).collect()
}

/// Computes F(`n`) with arbitrary precision, keeping only the last two terms.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::fibonacci::fibonacci_big;
///
/// assert_eq!(fibonacci_big(100).to_string(), "354224848179261915075");
/// ```
pub fn fibonacci_big(n: usize) -> BigUint {
    let mut prev = BigUint::zero();
    let mut curr = BigUint::one();
    for _ in 0..n {
        let next = &prev + &curr;
        prev = std::mem::replace(&mut curr, next);
    }
    prev
}
