//! Bellman-Ford: repeated full relaxation sweeps.
//!
//! A shortest path visits at most `vertex_count - 1` edges, so that many
//! sweeps over every known vertex's incident edges suffice to finalise
//! the distance table — provided no reachable cycle has negative total
//! weight. One extra sweep afterwards detects exactly that case.

use tracing::{debug, instrument};

use crate::graph::WeightedGraph;

use super::{ShortestPathTree, SsspError};

/// Computes the shortest-path tree from `source` with the Bellman-Ford
/// algorithm, in O(V·E).
///
/// Negative edge weights are tolerated. Note that on an undirected
/// backing a negative edge is itself a negative cycle (it can be
/// traversed back and forth), so negative weights are only meaningful on
/// directed graphs.
///
/// # Errors
///
/// Returns [`SsspError::EmptyGraph`] when the graph has no vertices,
/// [`SsspError::VertexOutOfBounds`] when `source` is out of range,
/// [`SsspError::NegativeCycle`] when a reachable cycle with negative
/// total weight makes "shortest" undefined, and propagates any
/// [`crate::GraphError`] raised by the backing.
#[instrument(
    name = "sssp.bellman_ford",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count(), source = source),
)]
pub fn bellman_ford<G: WeightedGraph>(
    graph: &G,
    source: usize,
) -> Result<ShortestPathTree, SsspError> {
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

    for _ in 1..vertex_count {
        relax_all(graph, &mut tree)?;
    }

    // Detection sweep: any further improvement can only come from a
    // reachable negative cycle.
    if relax_all(graph, &mut tree)? {
        return Err(SsspError::NegativeCycle);
    }

    debug!(
        reached = tree.distances().iter().flatten().count(),
        "bellman-ford finished"
    );
    Ok(tree)
}

/// One full sweep: every vertex with a known distance relaxes each of
/// its incident edges. Returns `true` when any distance improved.
fn relax_all<G: WeightedGraph>(graph: &G, tree: &mut ShortestPathTree) -> Result<bool, SsspError> {
    let mut improved = false;
    for vertex in 0..graph.vertex_count() {
        let Some(base) = tree.known(vertex) else {
            continue;
        };
        for edge in graph.adjacent_edges(vertex)? {
            let other = edge.other_endpoint(vertex)?;
            let candidate = base + f64::from(edge.weight());
            if tree.improve(other, candidate, edge) {
                improved = true;
            }
        }
    }
    Ok(improved)
}
