pub mod fibonacci;
pub mod knapsack;
pub mod longest_common_subsequence;
pub mod longest_increasing_subsequence;

// Re-export dynamic programming algorithms with descriptive names
pub use fibonacci::{
    fibonacci_big, fibonacci_memoized, fibonacci_sequence, fibonacci_tabulated, FibonacciMemo,
    MAX_FIBONACCI_U128_INDEX,
};
pub use knapsack::{knapsack_01, knapsack_01_solution, KnapsackSolution};
pub use longest_common_subsequence::{lcs_length, lcs_memoized, lcs_sequence};
pub use longest_increasing_subsequence::{
    lis_length_quadratic, longest_increasing_subsequence, longest_increasing_subsequence_length,
};
