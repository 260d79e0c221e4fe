//! Single-source shortest path benchmarks.
//!
//! Compares Dijkstra and Bellman-Ford over seeded random digraphs in
//! which vertex 0 reaches every other vertex.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use spantree_benches::random_reachable_digraph;
use spantree_core::{GraphError, bellman_ford, dijkstra};

/// Seed used for all synthetic graph generation in this benchmark.
const SEED: u64 = 42;

/// Vertex counts to benchmark. Bellman-Ford is O(V·E), so the sweep
/// stays smaller than the MST one.
const VERTEX_COUNTS: &[usize] = &[100, 500, 1_000];

fn sssp_algorithms_impl(c: &mut Criterion) -> Result<(), GraphError> {
    let mut group = c.benchmark_group("sssp");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        let graph = random_reachable_digraph(vertex_count, vertex_count * 4, SEED)?;

        group.bench_with_input(
            BenchmarkId::new("dijkstra", vertex_count),
            &graph,
            |b, graph| {
                b.iter(|| dijkstra(graph, 0));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("bellman_ford", vertex_count),
            &graph,
            |b, graph| {
                b.iter(|| bellman_ford(graph, 0));
            },
        );
    }

    group.finish();
    Ok(())
}

fn sssp_algorithms(c: &mut Criterion) {
    if let Err(err) = sssp_algorithms_impl(c) {
        panic!("sssp benchmark setup failed: {err}");
    }
}

criterion_group!(benches, sssp_algorithms);
criterion_main!(benches);
