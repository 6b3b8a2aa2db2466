use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ripple_ksp::algorithm::ripple_spreading::RippleSpreading;
use ripple_ksp::algorithm::KShortestPathAlgorithm;
use ripple_ksp::graph::generators::{generate_grid, generate_random};

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    let rsa = RippleSpreading::new();

    for &n in &[500usize, 2_000] {
        let graph = generate_random(n, 4.0, 7);
        for &k in &[1usize, 8] {
            group.bench_with_input(BenchmarkId::new(format!("n{}", n), k), &k, |b, &k| {
                b.iter(|| {
                    rsa.compute_k_shortest_paths(black_box(&graph), 0, n - 1, k)
                        .unwrap()
                })
            });
        }
    }
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let graph = generate_grid(30, 30);
    let rsa = RippleSpreading::new();
    c.bench_function("grid_30x30_k10", |b| {
        b.iter(|| rsa.compute_k_shortest_paths(black_box(&graph), 0, 899, 10).unwrap())
    });
}

criterion_group!(benches, bench_random_graphs, bench_grid);
criterion_main!(benches);
