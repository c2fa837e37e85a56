//! 0/1 knapsack solved by bottom-up tabulation.

use crate::error::{Error, Result};

/// An optimal knapsack packing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSolution {
    /// Total value of the chosen items.
    pub value: u64,
    /// Total weight of the chosen items, never above the capacity.
    pub weight: usize,
    /// Indices of the chosen items, ascending.
    pub items: Vec<usize>,
}

/// Builds `dp` where `dp[i][w]` is the best value using the first `i` items
/// with capacity `w`.
fn fill_table(weights: &[usize], values: &[u64], capacity: usize) -> Result<Vec<Vec<u64>>> {
    if weights.len() != values.len() {
        log::warn!(
            "knapsack rejected: {} weights but {} values",
            weights.len(),
            values.len()
        );
        return Err(Error::length_mismatch(weights.len(), values.len()));
    }

    let n = values.len();
    let mut dp = vec![vec![0_u64; capacity + 1]; n + 1];

    for i in 1..=n {
        let item_weight = weights[i - 1];
        let item_value = values[i - 1];

        for w in 0..=capacity {
            let without_item = dp[i - 1][w];
            let with_item = if item_weight <= w {
                item_value
                    .checked_add(dp[i - 1][w - item_weight])
                    .ok_or(Error::ValueOverflow)?
            } else {
                0
            };
            dp[i][w] = without_item.max(with_item);
        }
    }

    log::debug!(
        "knapsack table {}x{} filled, best value {}",
        n + 1,
        capacity + 1,
        dp[n][capacity]
    );
    Ok(dp)
}

/// Returns the maximum total value of items that fit within `capacity`,
/// taking each item at most once.
///
/// `weights[i]` and `values[i]` describe item `i`; the slices must have the
/// same length or [`Error::LengthMismatch`] is returned.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::knapsack::knapsack_01;
///
/// let weights = [10, 20, 30];
/// let values = [60, 100, 120];
/// assert_eq!(knapsack_01(&weights, &values, 50).unwrap(), 220);
/// ```
pub fn knapsack_01(weights: &[usize], values: &[u64], capacity: usize) -> Result<u64> {
    let dp = fill_table(weights, values, capacity)?;
    Ok(dp[values.len()][capacity])
}

/// Like [`knapsack_01`], but also reports which items make up the optimum.
///
/// Walking back from the last row, item `i - 1` is part of the packing
/// exactly when it changed the best value for the remaining capacity.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::knapsack::knapsack_01_solution;
///
/// let solution = knapsack_01_solution(&[5, 4, 6, 3], &[10, 40, 30, 50], 10).unwrap();
/// assert_eq!(solution.value, 90);
/// assert_eq!(solution.items, vec![1, 3]);
/// assert_eq!(solution.weight, 7);
/// ```
pub fn knapsack_01_solution(
    weights: &[usize],
    values: &[u64],
    capacity: usize,
) -> Result<KnapsackSolution> {
    let dp = fill_table(weights, values, capacity)?;
    let n = values.len();

    let mut items = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        if dp[i][w] != dp[i - 1][w] {
            log::trace!("knapsack backtrack: take item {} at capacity {w}", i - 1);
            items.push(i - 1);
            w -= weights[i - 1];
        }
    }
    items.reverse();

    Ok(KnapsackSolution {
        value: dp[n][capacity],
        weight: items.iter().map(|&i| weights[i]).sum(),
        items,
    })
}
