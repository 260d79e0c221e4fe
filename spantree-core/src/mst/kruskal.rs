//! Kruskal: sort every edge ascending, accept each one whose endpoints
//! are not yet connected, tracked by a union-find.

use tracing::{debug, instrument};

use crate::{graph::WeightedGraph, union_find::DisjointSet};

use super::{MstError, SpanningTree, collect_undirected_edges};

/// Computes a minimum spanning tree with Kruskal's algorithm.
///
/// Edges are sorted ascending by the documented total order
/// (weight, then endpoints), then scanned once: an edge is accepted
/// exactly when it joins two components, which the union-find answers in
/// near-constant amortised time. The scan stops after `vertex_count - 1`
/// acceptances. On a disconnected graph the scan exhausts the edges and
/// the result is a minimum spanning forest.
///
/// # Errors
///
/// Returns [`MstError::EmptyGraph`] when the graph has no vertices, and
/// propagates any [`crate::GraphError`] raised by the backing.
#[instrument(
    name = "mst.kruskal",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn kruskal<G: WeightedGraph>(graph: &G) -> Result<SpanningTree, MstError> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    let mut edges = collect_undirected_edges(graph)?;
    edges.sort_unstable();

    let mut components = DisjointSet::new(vertex_count);
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));

    for edge in edges {
        if accepted.len() + 1 == vertex_count {
            break;
        }
        if components.union(edge.source(), edge.target())? {
            accepted.push(edge);
        }
    }

    let tree = SpanningTree::from_edges(accepted);
    debug!(
        tree_edges = tree.edges().len(),
        total_weight = tree.total_weight(),
        components = components.set_count(),
        "kruskal finished"
    );
    Ok(tree)
}
