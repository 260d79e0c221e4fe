//! The weighted-graph capability trait consumed by every algorithm.

use crate::{edge::WeightedEdge, error::GraphError};

/// Whether a graph stores each edge in one direction or both.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphKind {
    /// Edges are symmetric: `has_edge(a, b) == has_edge(b, a)`.
    Undirected,
    /// Edges point from source to target only.
    Directed,
}

/// Abstraction over a weighted graph with a fixed vertex population.
///
/// Vertices are dense integer ids in `0..vertex_count()`; the count is
/// fixed when a backing is constructed. The algorithms in this crate
/// treat any implementation as read-only for the duration of a run and
/// never assume a particular backing's complexity beyond
/// "[`adjacent_edges`](Self::adjacent_edges) enumerates the vertex's
/// incident edges".
///
/// # Examples
/// ```
/// use spantree_core::{GraphError, WeightedEdge, WeightedGraph};
///
/// /// Undirected edge-list toy backing.
/// struct Ring(Vec<Vec<WeightedEdge>>);
///
/// impl WeightedGraph for Ring {
///     fn vertex_count(&self) -> usize { self.0.len() }
///     fn edge_count(&self) -> usize {
///         self.0.iter().map(Vec::len).sum::<usize>() / 2
///     }
///     fn has_edge(&self, source: usize, target: usize) -> Result<bool, GraphError> {
///         Ok(self.0[source].iter().any(|e| e.target() == target))
///     }
///     fn adjacent_edges(&self, vertex: usize) -> Result<Vec<WeightedEdge>, GraphError> {
///         Ok(self.0[vertex].clone())
///     }
///     fn add_edge(&mut self, source: usize, target: usize, weight: f32) -> Result<(), GraphError> {
///         self.0[source].push(WeightedEdge::new(source, target, weight));
///         self.0[target].push(WeightedEdge::new(target, source, weight));
///         Ok(())
///     }
/// }
///
/// let mut ring = Ring(vec![Vec::new(); 3]);
/// ring.add_edge(0, 1, 2.0)?;
/// assert!(ring.has_edge(1, 0)?);
/// # Ok::<(), GraphError>(())
/// ```
pub trait WeightedGraph {
    /// Returns the number of vertices, fixed at construction.
    fn vertex_count(&self) -> usize;

    /// Returns the number of logical edges added so far.
    fn edge_count(&self) -> usize;

    /// Reports whether an edge connects `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfBounds`] when either vertex id is
    /// outside `0..vertex_count()`.
    fn has_edge(&self, source: usize, target: usize) -> Result<bool, GraphError>;

    /// Enumerates the edges incident to `vertex`.
    ///
    /// For undirected backings each returned edge has `vertex` as one of
    /// its endpoints; for directed backings `vertex` is always the source.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfBounds`] when `vertex` is outside
    /// `0..vertex_count()`.
    fn adjacent_edges(&self, vertex: usize) -> Result<Vec<WeightedEdge>, GraphError>;

    /// Adds an edge from `source` to `target` with the given weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfBounds`] for out-of-range vertex
    /// ids and [`GraphError::NonFiniteWeight`] when `weight` is NaN or
    /// infinite. Weights are validated here once so the algorithms can
    /// rely on [`f32::total_cmp`] being a genuine total order downstream.
    fn add_edge(&mut self, source: usize, target: usize, weight: f32) -> Result<(), GraphError>;
}
