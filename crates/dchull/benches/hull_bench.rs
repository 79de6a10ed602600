//! Criterion benchmarks for the hull solvers.
//! Sizes: n in {100, 1k, 10k, 100k}; disk clouds (few hull vertices) and
//! thin rings (most points on the hull).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p dchull

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dchull::hull::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use dchull::hull::{
    compute_hull_with, DivideAndConquer, HullCfg, HullSolver, MonotoneChain, NoopObserver,
};

fn bench_solvers(c: &mut Criterion) {
    for (label, shape) in [
        ("disk", CloudShape::Disk),
        ("ring", CloudShape::Ring { thickness: 0.01 }),
    ] {
        let mut group = c.benchmark_group(format!("hull/{label}"));
        for &n in &[100usize, 1_000, 10_000, 100_000] {
            let cloud = draw_cloud(
                CloudCfg {
                    count: n,
                    shape,
                    scale: 1.0,
                },
                ReplayToken { seed: 7, index: n as u64 },
            );
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::new("divide_and_conquer", n), &cloud, |b, pts| {
                let solver = DivideAndConquer::default();
                b.iter(|| solver.solve(pts).unwrap())
            });
            group.bench_with_input(BenchmarkId::new("monotone_chain", n), &cloud, |b, pts| {
                b.iter(|| MonotoneChain.solve(pts).unwrap())
            });
            group.bench_with_input(BenchmarkId::new("dc_parallel", n), &cloud, |b, pts| {
                let cfg = HullCfg {
                    parallel_cutoff: Some(4_096),
                    ..HullCfg::default()
                };
                b.iter(|| compute_hull_with(pts, &cfg, &NoopObserver).unwrap())
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
