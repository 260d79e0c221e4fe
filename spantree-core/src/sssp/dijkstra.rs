//! Dijkstra with an indexed heap keyed by vertex id.
//!
//! Each unvisited frontier vertex holds at most one heap entry: its best
//! known tentative distance and the edge that achieved it. Extraction
//! finalises a vertex (with no negative edges, no later path can beat
//! it), then relaxes its incident edges.

use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::{edge::WeightedEdge, graph::WeightedGraph, indexed_heap::IndexedMinHeap};

use super::{ShortestPathTree, SsspError};

/// A frontier entry: the tentative distance of a vertex and the edge the
/// distance arrives through. Ordered by distance so the heap always
/// yields the closest frontier vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PathCost {
    distance: f64,
    edge: WeightedEdge,
}

impl Eq for PathCost {}

impl Ord for PathCost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.edge.cmp(&other.edge))
    }
}

impl PartialOrd for PathCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the shortest-path tree from `source` with Dijkstra's
/// algorithm, in O(E log V).
///
/// Negative edge weights are a caller obligation: they are not detected
/// and the result is contractually undefined in their presence. Use
/// [`super::bellman_ford`] for graphs that may carry them.
///
/// # Errors
///
/// Returns [`SsspError::EmptyGraph`] when the graph has no vertices,
/// [`SsspError::VertexOutOfBounds`] when `source` is out of range, and
/// propagates any [`crate::GraphError`] raised by the backing.
#[instrument(
    name = "sssp.dijkstra",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count(), source = source),
)]
pub fn dijkstra<G: WeightedGraph>(graph: &G, source: usize) -> Result<ShortestPathTree, SsspError> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        return Err(SsspError::EmptyGraph);
    }
    if source >= vertex_count {
        return Err(SsspError::VertexOutOfBounds {
            vertex: source,
            vertex_count,
        });
    }

    let mut tree = ShortestPathTree::with_source(source, vertex_count);
    let mut visited = vec![false; vertex_count];
    let mut frontier: IndexedMinHeap<PathCost> = IndexedMinHeap::with_capacity(vertex_count);

    visited[source] = true;
    relax_neighbours(graph, source, 0.0, &mut tree, &visited, &mut frontier)?;

    while !frontier.is_empty() {
        let (vertex, cost) = frontier.extract_min()?;
        visited[vertex] = true;
        relax_neighbours(graph, vertex, cost.distance, &mut tree, &visited, &mut frontier)?;
    }

    debug!(
        reached = tree.distances().iter().flatten().count(),
        "dijkstra finished"
    );
    Ok(tree)
}

/// Relaxes every edge out of `vertex`, whose distance `base` is final:
/// an improved neighbour enters the frontier or has its entry updated in
/// place.
fn relax_neighbours<G: WeightedGraph>(
    graph: &G,
    vertex: usize,
    base: f64,
    tree: &mut ShortestPathTree,
    visited: &[bool],
    frontier: &mut IndexedMinHeap<PathCost>,
) -> Result<(), SsspError> {
    for edge in graph.adjacent_edges(vertex)? {
        let other = edge.other_endpoint(vertex)?;
        if visited[other] {
            continue;
        }
        let candidate = base + f64::from(edge.weight());
        if tree.improve(other, candidate, edge) {
            let cost = PathCost {
                distance: candidate,
                edge,
            };
            if frontier.contains(other)? {
                frontier.update(other, cost)?;
            } else {
                frontier.insert(other, cost)?;
            }
        }
    }
    Ok(())
}
