//! Lazy Prim: grow the cut one vertex at a time, keeping every crossing
//! edge seen so far in a plain min-heap and discarding the stale ones on
//! extraction.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, instrument};

use crate::{edge::WeightedEdge, graph::WeightedGraph};

use super::{MstError, SpanningTree};

/// Computes a minimum spanning tree with the lazy variant of Prim's
/// algorithm, starting from vertex 0.
///
/// Every edge may enter the heap once, so the bound is O(E log E). On a
/// disconnected graph the returned tree covers only the component
/// containing vertex 0.
///
/// # Errors
///
/// Returns [`MstError::EmptyGraph`] when the graph has no vertices, and
/// propagates any [`crate::GraphError`] raised by the backing.
#[instrument(
    name = "mst.lazy_prim",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn lazy_prim<G: WeightedGraph>(graph: &G) -> Result<SpanningTree, MstError> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    let mut visited = vec![false; vertex_count];
    let mut crossing: BinaryHeap<Reverse<WeightedEdge>> = BinaryHeap::new();
    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));

    visit(graph, 0, &mut visited, &mut crossing)?;

    while let Some(Reverse(edge)) = crossing.pop() {
        let source_inside = visited[edge.source()];
        let target_inside = visited[edge.target()];
        if source_inside && target_inside {
            // Stale: both endpoints entered the cut since the push.
            continue;
        }
        accepted.push(edge);
        let reached = if source_inside {
            edge.target()
        } else {
            edge.source()
        };
        visit(graph, reached, &mut visited, &mut crossing)?;
    }

    let tree = SpanningTree::from_edges(accepted);
    debug!(
        tree_edges = tree.edges().len(),
        total_weight = tree.total_weight(),
        "lazy prim finished"
    );
    Ok(tree)
}

/// Moves `vertex` inside the cut and pushes its crossing edges.
fn visit<G: WeightedGraph>(
    graph: &G,
    vertex: usize,
    visited: &mut [bool],
    crossing: &mut BinaryHeap<Reverse<WeightedEdge>>,
) -> Result<(), MstError> {
    visited[vertex] = true;
    for edge in graph.adjacent_edges(vertex)? {
        if !visited[edge.other_endpoint(vertex)?] {
            crossing.push(Reverse(edge));
        }
    }
    Ok(())
}
