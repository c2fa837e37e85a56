//! Error types shared by the algorithm modules.

use thiserror::Error;

/// Errors reported by the fallible dynamic programming routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Knapsack weights and values describe a different number of items.
    #[error("weights and values must describe the same items: {weights} weights, {values} values")]
    LengthMismatch {
        /// Number of weights supplied
        weights: usize,
        /// Number of values supplied
        values: usize,
    },

    /// F(n) does not fit in a `u128`.
    #[error("Fibonacci number F({n}) overflows u128")]
    FibonacciOverflow {
        /// Requested index
        n: usize,
    },

    /// A sum of item values exceeded `u64::MAX`.
    #[error("total item value overflows u64")]
    ValueOverflow,
}

impl Error {
    /// Create a LengthMismatch error from the two slice lengths.
    pub fn length_mismatch(weights: usize, values: usize) -> Self {
        Self::LengthMismatch { weights, values }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
