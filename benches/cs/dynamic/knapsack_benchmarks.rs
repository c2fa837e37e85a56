use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dp_algos::cs::dynamic::{knapsack_01, knapsack_01_solution};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_items(rng: &mut StdRng, n: usize) -> (Vec<usize>, Vec<u64>) {
    (0..n)
        .map(|_| (rng.gen_range(1..50), rng.gen_range(1..1_000)))
        .unzip()
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_01");
    let mut rng = StdRng::seed_from_u64(42);
    for &n in &[10usize, 50, 200] {
        let (weights, values) = random_items(&mut rng, n);
        let capacity = n * 10;
        group.bench_with_input(BenchmarkId::new("value", n), &n, |b, _| {
            b.iter(|| knapsack_01(black_box(&weights), black_box(&values), capacity))
        });
        group.bench_with_input(BenchmarkId::new("solution", n), &n, |b, _| {
            b.iter(|| knapsack_01_solution(black_box(&weights), black_box(&values), capacity))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack);
criterion_main!(benches);
