//! Prim with an indexed heap: at most one candidate crossing edge per
//! vertex, replaced in place whenever a lighter one appears.

use tracing::{debug, instrument};

use crate::{edge::WeightedEdge, graph::WeightedGraph, indexed_heap::IndexedMinHeap};

use super::{MstError, SpanningTree};

/// Computes a minimum spanning tree with Prim's algorithm, starting from
/// vertex 0.
///
/// Unlike [`super::lazy_prim`] the heap is keyed by vertex id and holds
/// at most one entry per unvisited vertex, so no stale entries
/// accumulate and the bound drops to O(E log V). In the connected case
/// the heap empties after exactly `vertex_count - 1` extractions. On a
/// disconnected graph the returned tree covers only the component
/// containing vertex 0.
///
/// # Errors
///
/// Returns [`MstError::EmptyGraph`] when the graph has no vertices, and
/// propagates any [`crate::GraphError`] raised by the backing.
#[instrument(
    name = "mst.prim",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn prim<G: WeightedGraph>(graph: &G) -> Result<SpanningTree, MstError> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    let mut visited = vec![false; vertex_count];
    let mut candidates: IndexedMinHeap<WeightedEdge> = IndexedMinHeap::with_capacity(vertex_count);
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));

    offer_candidates(graph, 0, &mut visited, &mut candidates)?;

    while !candidates.is_empty() {
        let (vertex, edge) = candidates.extract_min()?;
        accepted.push(edge);
        offer_candidates(graph, vertex, &mut visited, &mut candidates)?;
    }

    let tree = SpanningTree::from_edges(accepted);
    debug!(
        tree_edges = tree.edges().len(),
        total_weight = tree.total_weight(),
        "prim finished"
    );
    Ok(tree)
}

/// Moves `vertex` inside the cut and offers its crossing edges as
/// candidates: first contact inserts, a lighter edge replaces, anything
/// heavier is ignored.
fn offer_candidates<G: WeightedGraph>(
    graph: &G,
    vertex: usize,
    visited: &mut [bool],
    candidates: &mut IndexedMinHeap<WeightedEdge>,
) -> Result<(), MstError> {
    visited[vertex] = true;
    for edge in graph.adjacent_edges(vertex)? {
        let other = edge.other_endpoint(vertex)?;
        if visited[other] {
            continue;
        }
        match candidates.value(other)?.copied() {
            None => candidates.insert(other, edge)?,
            Some(current) if edge < current => candidates.update(other, edge)?,
            Some(_) => {}
        }
    }
    Ok(())
}
