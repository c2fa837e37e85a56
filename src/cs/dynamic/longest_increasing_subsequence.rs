//! Longest strictly increasing subsequence.

/// `lengths[i]` is the LIS length ending at `numbers[i]`; `parents[i]` is the
/// index before `i` on that subsequence, if any.
fn ending_lengths<T: Ord>(numbers: &[T]) -> (Vec<usize>, Vec<Option<usize>>) {
    let mut lengths = vec![1; numbers.len()];
    let mut parents = vec![None; numbers.len()];

    for i in 0..numbers.len() {
        for j in 0..i {
            // Strict `>` keeps the earliest predecessor on ties.
            if numbers[i] > numbers[j] && lengths[j] + 1 > lengths[i] {
                lengths[i] = lengths[j] + 1;
                parents[i] = Some(j);
            }
        }
    }

    (lengths, parents)
}

/// Returns the length of the Longest Increasing Subsequence (LIS) in
/// `numbers` using the O(n²) table of lengths ending at each index.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::longest_increasing_subsequence::lis_length_quadratic;
///
/// assert_eq!(lis_length_quadratic(&[0, 1, 0, 3, 2, 3]), 4);
/// assert_eq!(lis_length_quadratic::<i32>(&[]), 0);
/// ```
pub fn lis_length_quadratic<T: Ord>(numbers: &[T]) -> usize {
    let (lengths, _) = ending_lengths(numbers);
    lengths.into_iter().max().unwrap_or(0)
}

/// Returns the length of the Longest Increasing Subsequence (LIS) in `numbers`.
///
/// Runs in O(n log n): `tails[k]` holds the smallest value that ends an
/// increasing subsequence of length `k + 1`, and stays sorted.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence_length;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence_length(&arr), 4);
/// // One possible LIS is [2, 5, 7, 101]
/// ```
pub fn longest_increasing_subsequence_length<T: Ord>(numbers: &[T]) -> usize {
    let mut tails: Vec<&T> = Vec::with_capacity(numbers.len());

    for num in numbers {
        // First tail >= num; equal values must not extend a strictly increasing run.
        let pos = tails.partition_point(|&tail| tail < num);
        if pos == tails.len() {
            tails.push(num);
        } else {
            tails[pos] = num;
        }
    }
    tails.len()
}

/// Returns one actual Longest Increasing Subsequence (LIS) in `numbers`.
///
/// The subsequence ends at the first index that reaches the maximum length
/// and is rebuilt by following predecessor links back from there.
///
/// # Examples
///
/// ```
/// use dp_algos::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence(&arr), vec![2, 5, 7, 101]);
/// ```
pub fn longest_increasing_subsequence<T: Ord + Clone>(numbers: &[T]) -> Vec<T> {
    let (lengths, parents) = ending_lengths(numbers);

    let mut best_len = 0;
    let mut end = None;
    for (i, &len) in lengths.iter().enumerate() {
        if len > best_len {
            best_len = len;
            end = Some(i);
        }
    }
    log::debug!("lis over {} elements: length {best_len}", numbers.len());

    let mut lis = Vec::with_capacity(best_len);
    let mut curr = end;
    while let Some(i) = curr {
        lis.push(numbers[i].clone());
        curr = parents[i];
    }
    lis.reverse();
    lis
}
