//! Synthetic graph generation shared by the benchmark targets.
//!
//! Graphs are derived from a seed so that runs are reproducible and the
//! benchmark targets measure the algorithms rather than the generator.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spantree_core::{GraphError, GraphKind, WeightedGraph};
use spantree_providers_sparse::AdjacencyGraph;

const MAX_WEIGHT: f32 = 100.0;

/// Builds a connected undirected graph: a random spanning tree over
/// `vertex_count` vertices plus `extra_edges` random edges.
///
/// # Errors
///
/// Returns a [`GraphError`] if a generated edge is rejected by the
/// backing; with in-range vertices and finite weights this does not
/// happen.
pub fn random_connected_graph(
    vertex_count: usize,
    extra_edges: usize,
    seed: u64,
) -> Result<AdjacencyGraph, GraphError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = AdjacencyGraph::new(vertex_count, GraphKind::Undirected);
    for vertex in 1..vertex_count {
        let anchor = rng.gen_range(0..vertex);
        graph.add_edge(anchor, vertex, rng.gen_range(0.0..MAX_WEIGHT))?;
    }
    push_random_edges(&mut graph, extra_edges, &mut rng)?;
    Ok(graph)
}

/// Builds a directed graph whose vertex 0 reaches every other vertex:
/// a random out-tree from vertex 0 plus `extra_edges` random arcs.
///
/// # Errors
///
/// Returns a [`GraphError`] if a generated edge is rejected by the
/// backing; with in-range vertices and finite weights this does not
/// happen.
pub fn random_reachable_digraph(
    vertex_count: usize,
    extra_edges: usize,
    seed: u64,
) -> Result<AdjacencyGraph, GraphError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut graph = AdjacencyGraph::new(vertex_count, GraphKind::Directed);
    for vertex in 1..vertex_count {
        let anchor = rng.gen_range(0..vertex);
        graph.add_edge(anchor, vertex, rng.gen_range(0.0..MAX_WEIGHT))?;
    }
    push_random_edges(&mut graph, extra_edges, &mut rng)?;
    Ok(graph)
}

fn push_random_edges(
    graph: &mut AdjacencyGraph,
    count: usize,
    rng: &mut SmallRng,
) -> Result<(), GraphError> {
    let vertex_count = graph.vertex_count();
    for _ in 0..count {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source != target {
            graph.add_edge(source, target, rng.gen_range(0.0..MAX_WEIGHT))?;
        }
    }
    Ok(())
}
