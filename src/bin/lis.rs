use dp_algos::cs::dynamic::{
    lis_length_quadratic, longest_increasing_subsequence, longest_increasing_subsequence_length,
};

fn main() {
    println!("--- Longest Increasing Subsequence Problem ---");

    let cases: [(&[i32], usize); 7] = [
        (&[10, 9, 2, 5, 3, 7, 101, 18], 4),
        (&[0, 1, 0, 3, 2, 3], 4),
        (&[7, 7, 7, 7, 7, 7, 7], 1),
        (&[], 0),
        (&[1], 1),
        (&[3, 4, -1, 0, 6, 2, 3], 4),
        (&[10, 22, 9, 33, 21, 50, 41, 60, 80], 6),
    ];

    for (i, (nums, expected)) in cases.into_iter().enumerate() {
        println!("\nTest case {}:", i + 1);
        println!("  Array: {nums:?}");

        let quadratic = lis_length_quadratic(nums);
        println!("  LIS length (O(n^2) tabulation): {quadratic}");
        assert_eq!(quadratic, expected);

        let patience = longest_increasing_subsequence_length(nums);
        println!("  LIS length (O(n log n) patience sorting): {patience}");
        assert_eq!(patience, expected);

        let lis = longest_increasing_subsequence(nums);
        println!("  Reconstructed LIS: {lis:?}");
        assert_eq!(lis.len(), expected);
        assert!(lis.windows(2).all(|w| w[0] < w[1]));
    }

    println!("\nAll LIS checks passed!");
}
