use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dp_algos::cs::dynamic::{fibonacci_big, fibonacci_memoized, fibonacci_tabulated};

fn bench_fibonacci(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");
    for &n in &[20usize, 90, 186] {
        group.bench_with_input(BenchmarkId::new("memoized", n), &n, |b, &n| {
            b.iter(|| fibonacci_memoized(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("tabulated", n), &n, |b, &n| {
            b.iter(|| fibonacci_tabulated(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("big", n), &n, |b, &n| {
            b.iter(|| fibonacci_big(black_box(n)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fibonacci);
criterion_main!(benches);
