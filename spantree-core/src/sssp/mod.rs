//! Single-source shortest paths.
//!
//! Two tree builders over the [`WeightedGraph`] capability, both
//! producing a [`ShortestPathTree`] queried for distances and explicit
//! paths:
//!
//! - [`dijkstra`] — O(E log V) via an indexed heap; requires
//!   non-negative edge weights (a caller obligation, not detected);
//! - [`bellman_ford`] — O(V·E); tolerates negative edges and reports a
//!   negative cycle as an error instead of a meaningless table.
//!
//! An unreachable target is an expected outcome, reported as `None`,
//! never an error.

mod bellman_ford;
mod dijkstra;

use thiserror::Error;

use crate::{edge::WeightedEdge, error::GraphError, indexed_heap::HeapError};

pub use self::{bellman_ford::bellman_ford, dijkstra::dijkstra};

/// Errors returned while computing or querying shortest paths.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum SsspError {
    /// The caller requested shortest paths over a graph with no vertices.
    #[error("cannot compute shortest paths for an empty graph")]
    EmptyGraph,
    /// A vertex id fell outside `0..vertex_count`.
    #[error("vertex {vertex} is out of bounds, vertex_count is {vertex_count}")]
    VertexOutOfBounds {
        /// The offending vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// Relaxation still improved a distance after `vertex_count - 1`
    /// rounds, so the graph contains a reachable negative cycle and no
    /// shortest-path tree exists.
    #[error("graph contains a cycle with negative total weight")]
    NegativeCycle,
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
    /// An internal invariant was violated, indicating a logic error.
    #[error("shortest-path invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
    },
}

impl SsspError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> SsspErrorCode {
        match self {
            Self::EmptyGraph => SsspErrorCode::EmptyGraph,
            Self::VertexOutOfBounds { .. } => SsspErrorCode::VertexOutOfBounds,
            Self::NegativeCycle => SsspErrorCode::NegativeCycle,
            Self::Graph { .. } => SsspErrorCode::Graph,
            Self::Heap { .. } => SsspErrorCode::Heap,
            Self::InvariantViolation { .. } => SsspErrorCode::InvariantViolation,
        }
    }
}

/// Machine-readable error codes for [`SsspError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SsspErrorCode {
    /// The caller requested shortest paths over a graph with no vertices.
    EmptyGraph,
    /// A vertex id fell outside the graph's bounds.
    VertexOutOfBounds,
    /// The graph contains a reachable negative cycle.
    NegativeCycle,
    /// The graph backing rejected an access.
    Graph,
    /// The candidate heap rejected an operation.
    Heap,
    /// An internal invariant was violated.
    InvariantViolation,
}

impl SsspErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "SSSP_EMPTY_GRAPH",
            Self::VertexOutOfBounds => "SSSP_VERTEX_OUT_OF_BOUNDS",
            Self::NegativeCycle => "SSSP_NEGATIVE_CYCLE",
            Self::Graph => "SSSP_GRAPH_ACCESS",
            Self::Heap => "SSSP_HEAP",
            Self::InvariantViolation => "SSSP_INVARIANT_VIOLATION",
        }
    }
}

/// A shortest-path tree rooted at a source vertex.
///
/// Built eagerly by [`dijkstra`] or [`bellman_ford`] and immutable
/// thereafter. Distances accumulate as `f64`; a vertex the source never
/// reached holds `None` rather than a sentinel number, so the unreached
/// state cannot leak into arithmetic.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPathTree {
    source: usize,
    distances: Vec<Option<f64>>,
    came_from: Vec<Option<WeightedEdge>>,
}

impl ShortestPathTree {
    /// Creates a tree with only the source known, at distance zero.
    pub(crate) fn with_source(source: usize, vertex_count: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(0.0);
        Self {
            source,
            distances,
            came_from: vec![None; vertex_count],
        }
    }

    /// Returns the currently known distance of `vertex`, unchecked.
    pub(crate) fn known(&self, vertex: usize) -> Option<f64> {
        self.distances[vertex]
    }

    /// Relaxation core: adopts `distance` and `edge` for `vertex` when it
    /// beats the current best. Returns `true` on improvement.
    pub(crate) fn improve(&mut self, vertex: usize, distance: f64, edge: WeightedEdge) -> bool {
        match self.distances[vertex] {
            Some(best) if best <= distance => false,
            _ => {
                self.distances[vertex] = Some(distance);
                self.came_from[vertex] = Some(edge);
                true
            }
        }
    }

    /// Returns the source vertex the tree is rooted at.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the number of vertices the tree was built over.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.distances.len() }

    /// Returns the per-vertex distance table; `None` marks a vertex the
    /// source cannot reach.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[Option<f64>] { &self.distances }

    /// Returns the minimum total path weight from the source to `vertex`,
    /// or `None` when `vertex` is unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`SsspError::VertexOutOfBounds`] when `vertex` is outside
    /// `0..vertex_count`.
    pub fn distance_to(&self, vertex: usize) -> Result<Option<f64>, SsspError> {
        self.check_vertex(vertex)?;
        Ok(self.distances[vertex])
    }

    /// Reports whether the source reaches `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`SsspError::VertexOutOfBounds`] when `vertex` is outside
    /// `0..vertex_count`.
    pub fn has_path_to(&self, vertex: usize) -> Result<bool, SsspError> {
        self.check_vertex(vertex)?;
        Ok(self.distances[vertex].is_some())
    }

    /// Returns the shortest path from the source to `vertex` as edges in
    /// source-to-target order, `None` when `vertex` is unreachable, and
    /// an empty path for the source itself.
    ///
    /// The `came_from` chain is walked backward from `vertex` and then
    /// reversed.
    ///
    /// # Errors
    ///
    /// Returns [`SsspError::VertexOutOfBounds`] when `vertex` is outside
    /// `0..vertex_count`.
    pub fn path_to(&self, vertex: usize) -> Result<Option<Vec<WeightedEdge>>, SsspError> {
        self.check_vertex(vertex)?;
        if self.distances[vertex].is_none() {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut current = vertex;
        while current != self.source {
            let Some(edge) = self.came_from[current] else {
                return Err(SsspError::InvariantViolation {
                    invariant: "every reached non-source vertex records an incoming edge",
                });
            };
            path.push(edge);
            current = edge.other_endpoint(current)?;
        }
        path.reverse();
        Ok(Some(path))
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), SsspError> {
        if vertex >= self.distances.len() {
            return Err(SsspError::VertexOutOfBounds {
                vertex,
                vertex_count: self.distances.len(),
            });
        }
        Ok(())
    }
}
