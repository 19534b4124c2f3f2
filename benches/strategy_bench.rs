use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use mesh_cursor_bench::mesh::{Mesh, RandomMode};
use mesh_cursor_bench::strategy::Strategy;

fn build_mesh(cells: usize) -> Mesh {
    // Roughly one vertex per cell, like a real tetrahedral mesh.
    Mesh::try_generate(cells, cells, RandomMode::Reproducible { seed: 42 })
        .expect("benchmark mesh")
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("total_volume");

    for &cells in &[10_000usize, 1_000_000usize] {
        let mesh = build_mesh(cells);
        group.throughput(Throughput::Elements(cells as u64));

        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.key(), cells), &mesh, |b, mesh| {
                b.iter(|| black_box(strategy.total_volume(black_box(mesh))));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
