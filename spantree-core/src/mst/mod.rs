//! Minimum spanning tree construction.
//!
//! Three algorithms over the [`WeightedGraph`] capability, all resting
//! on the cut property: for any partition of the vertices, the lightest
//! crossing edge belongs to some minimum spanning tree.
//!
//! - [`lazy_prim`] — plain heap of every crossing edge seen, O(E log E);
//! - [`prim`] — indexed heap with one candidate per vertex, O(E log V);
//! - [`kruskal`] — global edge sort plus union-find, O(E log E).
//!
//! All three treat the graph as undirected and read-only. A disconnected
//! graph is not detected: lazy Prim and Prim return the tree of the
//! component containing vertex 0, Kruskal returns a spanning forest, and
//! [`SpanningTree::spans`] lets callers tell the difference.

mod kruskal;
mod lazy_prim;
mod prim;
#[cfg(test)]
mod property;

use thiserror::Error;

use crate::{
    edge::WeightedEdge, error::GraphError, graph::WeightedGraph, indexed_heap::HeapError,
    union_find::DisjointSetError,
};

pub use self::{kruskal::kruskal, lazy_prim::lazy_prim, prim::prim};

/// Errors returned while computing a minimum spanning tree.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The caller requested an MST for a graph with no vertices.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// The graph backing rejected an access.
    #[error("graph access failed: {error}")]
    Graph {
        /// The underlying capability error.
        #[from]
        #[source]
        error: GraphError,
    },
    /// The candidate heap rejected an operation, indicating a logic error.
    #[error("candidate heap operation failed: {error}")]
    Heap {
        /// The underlying heap error.
        #[from]
        #[source]
        error: HeapError,
    },
    /// The union-find rejected an operation, indicating a logic error.
    #[error("union-find operation failed: {error}")]
    DisjointSet {
        /// The underlying union-find error.
        #[from]
        #[source]
        error: DisjointSetError,
    },
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::EmptyGraph => MstErrorCode::EmptyGraph,
            Self::Graph { .. } => MstErrorCode::Graph,
            Self::Heap { .. } => MstErrorCode::Heap,
            Self::DisjointSet { .. } => MstErrorCode::DisjointSet,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// The caller requested an MST for a graph with no vertices.
    EmptyGraph,
    /// The graph backing rejected an access.
    Graph,
    /// The candidate heap rejected an operation.
    Heap,
    /// The union-find rejected an operation.
    DisjointSet,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "MST_EMPTY_GRAPH",
            Self::Graph => "MST_GRAPH_ACCESS",
            Self::Heap => "MST_HEAP",
            Self::DisjointSet => "MST_DISJOINT_SET",
        }
    }
}

/// The output of a minimum spanning tree computation.
///
/// Holds the accepted edges in acceptance order and their total weight,
/// accumulated once as `f64` after construction. When the input graph is
/// disconnected this is the partial tree or forest the algorithm
/// reached; [`Self::spans`] reports whether it covers a whole graph.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    edges: Vec<WeightedEdge>,
    total_weight: f64,
}

impl SpanningTree {
    pub(crate) fn from_edges(edges: Vec<WeightedEdge>) -> Self {
        let total_weight = edges.iter().map(|edge| f64::from(edge.weight())).sum();
        Self {
            edges,
            total_weight,
        }
    }

    /// Returns the tree edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge] { &self.edges }

    /// Returns the sum of the tree's edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns `true` when the tree spans a graph of `vertex_count`
    /// vertices, i.e. it holds exactly `vertex_count - 1` edges.
    #[must_use]
    pub fn spans(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count
    }
}

/// Collects each undirected edge exactly once.
///
/// Sweeping vertices in ascending order and keeping only edges whose far
/// endpoint is larger skips the mirrored copy a symmetric backing stores
/// under the other endpoint, and drops self-loops, which never belong in
/// a spanning tree. Parallel edges survive; the consumers discard the
/// heavier copies naturally.
fn collect_undirected_edges<G: WeightedGraph>(graph: &G) -> Result<Vec<WeightedEdge>, MstError> {
    let mut edges = Vec::with_capacity(graph.edge_count());
    for vertex in 0..graph.vertex_count() {
        for edge in graph.adjacent_edges(vertex)? {
            if edge.other_endpoint(vertex)? > vertex {
                edges.push(edge);
            }
        }
    }
    Ok(edges)
}
