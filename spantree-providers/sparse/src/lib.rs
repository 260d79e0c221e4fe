//! Adjacency-list backing for weighted graphs.
//!
//! Stores each vertex's incident edges in a per-vertex list, so
//! enumeration of a vertex's neighbours is O(degree) and the memory
//! footprint is proportional to the edge count. Parallel edges are kept
//! as distinct entries; the algorithms discard the heavier copies
//! themselves. This is the backing of choice for graphs far sparser
//! than `V^2`.

use spantree_core::{GraphError, GraphKind, WeightedEdge, WeightedGraph};


/// An adjacency-list graph over vertices `0..vertex_count`.
///
/// An undirected graph stores a mirrored copy of each edge under both
/// endpoints, each copy with `source` set to its owning vertex.
///
/// # Examples
/// ```
/// use spantree_core::{GraphKind, WeightedGraph};
/// use spantree_providers_sparse::AdjacencyGraph;
///
/// let mut graph = AdjacencyGraph::new(3, GraphKind::Undirected);
/// graph.add_edge(0, 1, 2.5)?;
/// assert!(graph.has_edge(1, 0)?);
/// assert_eq!(graph.degree(1)?, 1);
/// # Ok::<(), spantree_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AdjacencyGraph {
    kind: GraphKind,
    lists: Vec<Vec<WeightedEdge>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Creates an edgeless graph over `vertex_count` vertices.
    #[must_use]
    pub fn new(vertex_count: usize, kind: GraphKind) -> Self {
        Self {
            kind,
            lists: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Creates a graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphError`] raised while adding a triple.
    pub fn with_edges(
        vertex_count: usize,
        kind: GraphKind,
        edges: impl IntoIterator<Item = (usize, usize, f32)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count, kind);
        for (source, target, weight) in edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Returns whether the graph is directed or undirected.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kind(&self) -> GraphKind { self.kind }

    /// Returns the number of edges listed under `vertex`; for an
    /// undirected graph that is its degree.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfBounds`] when `vertex` is outside
    /// `0..vertex_count`.
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.lists[vertex].len())
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.lists.len() {
            return Err(GraphError::VertexOutOfBounds {
                vertex,
                vertex_count: self.lists.len(),
            });
        }
        Ok(())
    }
}

impl WeightedGraph for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_edge(&self, source: usize, target: usize) -> Result<bool, GraphError> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        Ok(self.lists[source].iter().any(|edge| edge.target() == target))
    }

    fn adjacent_edges(&self, vertex: usize) -> Result<Vec<WeightedEdge>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.lists[vertex].clone())
    }

    /// Appends an edge; a parallel edge between the same pair becomes a
    /// second entry rather than an overwrite.
    fn add_edge(&mut self, source: usize, target: usize, weight: f32) -> Result<(), GraphError> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight { source, target });
        }
        self.lists[source].push(WeightedEdge::new(source, target, weight));
        if self.kind == GraphKind::Undirected && source != target {
            self.lists[target].push(WeightedEdge::new(target, source, weight));
        }
        self.edge_count += 1;
        Ok(())
    }
}
