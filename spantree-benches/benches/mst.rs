//! Minimum spanning tree benchmarks.
//!
//! Compares the three MST algorithms over seeded random connected
//! graphs, isolating algorithm time from graph construction.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use spantree_benches::random_connected_graph;
use spantree_core::{GraphError, kruskal, lazy_prim, prim};

/// Seed used for all synthetic graph generation in this benchmark.
const SEED: u64 = 42;

/// Vertex counts to benchmark; each graph carries four extra edges per
/// vertex beyond its spanning tree.
const VERTEX_COUNTS: &[usize] = &[100, 1_000, 5_000];

fn mst_algorithms_impl(c: &mut Criterion) -> Result<(), GraphError> {
    let mut group = c.benchmark_group("mst");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        let graph = random_connected_graph(vertex_count, vertex_count * 4, SEED)?;

        group.bench_with_input(
            BenchmarkId::new("lazy_prim", vertex_count),
            &graph,
            |b, graph| {
                b.iter(|| lazy_prim(graph));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("prim", vertex_count),
            &graph,
            |b, graph| {
                b.iter(|| prim(graph));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("kruskal", vertex_count),
            &graph,
            |b, graph| {
                b.iter(|| kruskal(graph));
            },
        );
    }

    group.finish();
    Ok(())
}

fn mst_algorithms(c: &mut Criterion) {
    if let Err(err) = mst_algorithms_impl(c) {
        panic!("mst benchmark setup failed: {err}");
    }
}

criterion_group!(benches, mst_algorithms);
criterion_main!(benches);
