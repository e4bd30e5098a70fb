use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use intpdf::math::monte_carlo::{
    estimate_standard_normal_mass, estimate_standard_normal_mass_parallel,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_normal_sequential");
    for samples in [5_000u64, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &n| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| estimate_standard_normal_mass(black_box(n), &mut rng))
        });
    }
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_normal_parallel");
    for workers in [1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &w| {
            b.iter(|| estimate_standard_normal_mass_parallel(black_box(1_000_000), w, 42))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
