//! Criterion benchmarks for cone construction and reduction.
//! Sizes: walk length in {50, 200, 800} on 8 vertices up to triangles.
//! Results live under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use zigzag::field::Zp;
use zigzag::rand::{draw_zigzag, ReplayToken, ZigzagCfg};
use zigzag::{ConeFiltration, StandardReduction};

fn cfg(steps: usize) -> ZigzagCfg {
    ZigzagCfg {
        vertices: 8,
        max_dim: 2,
        steps,
    }
}

fn bench_cone(c: &mut Criterion) {
    let mut group = c.benchmark_group("cone");
    for &steps in &[50usize, 200, 800] {
        let zz = draw_zigzag(cfg(steps), ReplayToken { seed: 42, index: 0 }).unwrap();
        group.bench_with_input(BenchmarkId::new("build", steps), &zz, |b, zz| {
            b.iter(|| ConeFiltration::build(zz))
        });
        group.bench_with_input(BenchmarkId::new("reduce_z2", steps), &zz, |b, zz| {
            b.iter_batched(
                || ConeFiltration::build(zz),
                |cone| {
                    let _ = StandardReduction::reduce(&cone, Zp::default()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cone);
criterion_main!(benches);
