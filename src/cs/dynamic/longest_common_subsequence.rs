//! Longest common subsequence of two strings, compared by `char`.

use std::collections::HashMap;

/// Returns the length of the longest common subsequence (LCS) between `a` and
/// `b`, computed top-down with a cache keyed by prefix lengths.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::longest_common_subsequence::lcs_memoized;
///
/// assert_eq!(lcs_memoized("AGGTAB", "GXTXAYB"), 4);
/// ```
pub fn lcs_memoized(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut memo = HashMap::new();

    lcs_prefix(&a_chars, &b_chars, a_chars.len(), b_chars.len(), &mut memo)
}

/// LCS length of `a[..m]` and `b[..n]`.
fn lcs_prefix(
    a: &[char],
    b: &[char],
    m: usize,
    n: usize,
    memo: &mut HashMap<(usize, usize), usize>,
) -> usize {
    if m == 0 || n == 0 {
        return 0;
    }
    if let Some(&len) = memo.get(&(m, n)) {
        return len;
    }

    let len = if a[m - 1] == b[n - 1] {
        1 + lcs_prefix(a, b, m - 1, n - 1, memo)
    } else {
        let skip_a = lcs_prefix(a, b, m - 1, n, memo);
        let skip_b = lcs_prefix(a, b, m, n - 1, memo);
        skip_a.max(skip_b)
    };
    memo.insert((m, n), len);
    len
}

/// `dp[i][j]` is the LCS length of the first `i` chars of `a` and the first
/// `j` chars of `b`.
fn lcs_table(a: &[char], b: &[char]) -> Vec<Vec<usize>> {
    let m = a.len();
    let n = b.len();
    let mut dp = vec![vec![0; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    log::debug!("lcs table {}x{} filled, length {}", m + 1, n + 1, dp[m][n]);
    dp
}

/// Returns the length of the longest common subsequence (LCS) between `a` and `b`.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::longest_common_subsequence::lcs_length;
///
/// let s1 = "ABCDGH";
/// let s2 = "AEDFHR";
/// assert_eq!(lcs_length(s1, s2), 3); // "ADH" is one possible LCS
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    lcs_table(&a_chars, &b_chars)[a_chars.len()][b_chars.len()]
}

/// Reconstructs and returns one actual LCS (Longest Common Subsequence)
/// between `a` and `b`.
///
/// If there are multiple subsequences with the same length, the walk back
/// through the table steps past a char of `a` only when that keeps a strictly
/// longer LCS; ties step past a char of `b`. Returns an empty string if
/// there's no common subsequence.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::longest_common_subsequence::lcs_sequence;
///
/// assert_eq!(lcs_sequence("AGGTAB", "GXTXAYB"), "GTAB");
/// assert_eq!(lcs_sequence("ABCDGH", "AEDFHR"), "ADH");
/// ```
pub fn lcs_sequence(a: &str, b: &str) -> String {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let dp = lcs_table(&a_chars, &b_chars);

    let mut i = a_chars.len();
    let mut j = b_chars.len();
    let mut subsequence = Vec::with_capacity(dp[i][j]);

    while i > 0 && j > 0 {
        if a_chars[i - 1] == b_chars[j - 1] {
            subsequence.push(a_chars[i - 1]);
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] > dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    // The subsequence is constructed backwards, so reverse it.
    subsequence.reverse();
    subsequence.into_iter().collect()
}
