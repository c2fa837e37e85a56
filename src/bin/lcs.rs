use dp_algos::cs::dynamic::{lcs_length, lcs_memoized, lcs_sequence};

fn main() {
    println!("--- Longest Common Subsequence Problem ---");

    let cases = [
        ("AGGTAB", "GXTXAYB", 4, "GTAB"),
        ("ABCDGH", "AEDFHR", 3, "ADH"),
        ("ABC", "XYZ", 0, ""),
        ("AAAA", "AA", 2, "AA"),
        ("abcdef", "ace", 3, "ace"),
        ("abc", "abc", 3, "abc"),
        ("sea", "eat", 2, "ea"),
        ("XMJYAUZ", "MZJAWXU", 4, "MJAU"),
    ];

    for (i, (s1, s2, expected_len, expected_seq)) in cases.into_iter().enumerate() {
        println!("\nTest case {}:", i + 1);
        println!("  String 1: {s1:?}");
        println!("  String 2: {s2:?}");

        let memo = lcs_memoized(s1, s2);
        println!("  LCS length (memoization): {memo}");
        assert_eq!(memo, expected_len);

        let tab = lcs_length(s1, s2);
        println!("  LCS length (tabulation):  {tab}");
        assert_eq!(tab, expected_len);

        let seq = lcs_sequence(s1, s2);
        println!("  Reconstructed LCS: {seq:?}");
        assert_eq!(seq, expected_seq);
    }

    println!("\nAll LCS checks passed!");
}
