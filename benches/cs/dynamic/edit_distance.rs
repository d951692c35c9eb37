use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use levenshtein::{compute_edit_path, levenshtein_distance, CostTable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_string(rng: &mut ChaCha8Rng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut group = c.benchmark_group("edit_distance");

    for size in [16, 128, 512] {
        let a = random_string(&mut rng, size);
        let b = random_string(&mut rng, size);

        group.bench_with_input(BenchmarkId::new("rolling_rows", size), &size, |bench, _| {
            bench.iter(|| levenshtein_distance(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("cost_table", size), &size, |bench, _| {
            bench.iter(|| CostTable::from_strs(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("edit_path", size), &size, |bench, _| {
            bench.iter(|| compute_edit_path(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_edit_distance);
criterion_main!(benches);
