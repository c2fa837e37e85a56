use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dp_algos::cs::dynamic::{
    lcs_length, lcs_memoized, lcs_sequence, lis_length_quadratic,
    longest_increasing_subsequence, longest_increasing_subsequence_length,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn bench_lcs(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs");
    let mut rng = StdRng::seed_from_u64(42);
    for &len in &[50usize, 200, 500] {
        let s = random_dna(&mut rng, len);
        let t = random_dna(&mut rng, len);
        group.bench_with_input(BenchmarkId::new("memoized", len), &len, |b, _| {
            b.iter(|| lcs_memoized(black_box(&s), black_box(&t)))
        });
        group.bench_with_input(BenchmarkId::new("tabulated", len), &len, |b, _| {
            b.iter(|| lcs_length(black_box(&s), black_box(&t)))
        });
        group.bench_with_input(BenchmarkId::new("sequence", len), &len, |b, _| {
            b.iter(|| lcs_sequence(black_box(&s), black_box(&t)))
        });
    }
    group.finish();
}

fn bench_lis(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis");
    let mut rng = StdRng::seed_from_u64(7);
    for &len in &[100usize, 1_000, 5_000] {
        let nums: Vec<i32> = (0..len).map(|_| rng.gen_range(-10_000..10_000)).collect();
        group.bench_with_input(BenchmarkId::new("quadratic", len), &len, |b, _| {
            b.iter(|| lis_length_quadratic(black_box(&nums)))
        });
        group.bench_with_input(BenchmarkId::new("patience", len), &len, |b, _| {
            b.iter(|| longest_increasing_subsequence_length(black_box(&nums)))
        });
        group.bench_with_input(BenchmarkId::new("sequence", len), &len, |b, _| {
            b.iter(|| longest_increasing_subsequence(black_box(&nums)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lcs, bench_lis);
criterion_main!(benches);
