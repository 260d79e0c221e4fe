//! Dense matrix backing for weighted graphs.
//!
//! Stores the full `vertex_count x vertex_count` weight matrix, with a
//! vacant cell marking the absence of an edge. Edge existence checks are
//! O(1) and enumeration of a vertex's neighbours is O(V), which suits
//! graphs whose edge count approaches `V^2`. Parallel edges cannot be
//! represented: re-adding an edge overwrites the stored weight and
//! leaves the edge count unchanged.

use spantree_core::{GraphError, GraphKind, WeightedEdge, WeightedGraph};


/// An adjacency-matrix graph over vertices `0..vertex_count`.
///
/// The vertex count is fixed at construction. An undirected graph keeps
/// the matrix symmetric by writing both cells of a pair.
///
/// # Examples
/// ```
/// use spantree_core::{GraphKind, WeightedGraph};
/// use spantree_providers_dense::MatrixGraph;
///
/// let mut graph = MatrixGraph::new(3, GraphKind::Undirected);
/// graph.add_edge(0, 1, 2.5)?;
/// assert!(graph.has_edge(1, 0)?);
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), spantree_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MatrixGraph {
    kind: GraphKind,
    vertex_count: usize,
    cells: Vec<Option<f32>>,
    edge_count: usize,
}

impl MatrixGraph {
    /// Creates an edgeless graph over `vertex_count` vertices.
    #[must_use]
    pub fn new(vertex_count: usize, kind: GraphKind) -> Self {
        Self {
            kind,
            vertex_count,
            cells: vec![None; vertex_count * vertex_count],
            edge_count: 0,
        }
    }

    /// Returns whether the graph is directed or undirected.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kind(&self) -> GraphKind { self.kind }

    /// Returns the stored weight of the edge from `source` to `target`,
    /// or `None` when no such edge exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfBounds`] when either vertex is
    /// outside `0..vertex_count`.
    pub fn weight(&self, source: usize, target: usize) -> Result<Option<f32>, GraphError> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        Ok(self.cells[self.cell(source, target)])
    }

    const fn cell(&self, source: usize, target: usize) -> usize {
        source * self.vertex_count + target
    }

    const fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.vertex_count {
            return Err(GraphError::VertexOutOfBounds {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }
}

impl WeightedGraph for MatrixGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_edge(&self, source: usize, target: usize) -> Result<bool, GraphError> {
        Ok(self.weight(source, target)?.is_some())
    }

    fn adjacent_edges(&self, vertex: usize) -> Result<Vec<WeightedEdge>, GraphError> {
        self.check_vertex(vertex)?;
        let row = vertex * self.vertex_count;
        Ok(self.cells[row..row + self.vertex_count]
            .iter()
            .enumerate()
            .filter_map(|(target, cell)| {
                cell.map(|weight| WeightedEdge::new(vertex, target, weight))
            })
            .collect())
    }

    /// Adds an edge, overwriting the weight of an existing one. Only the
    /// first add of a vertex pair increments the edge count.
    fn add_edge(&mut self, source: usize, target: usize, weight: f32) -> Result<(), GraphError> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight { source, target });
        }
        let cell = self.cell(source, target);
        if self.cells[cell].is_none() {
            self.edge_count += 1;
        }
        self.cells[cell] = Some(weight);
        if self.kind == GraphKind::Undirected {
            let mirror = self.cell(target, source);
            self.cells[mirror] = Some(weight);
        }
        Ok(())
    }
}
