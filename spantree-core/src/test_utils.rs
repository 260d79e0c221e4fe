//! Test-only graph backing for exercising the algorithms in-crate.
//!
//! A deliberately simple adjacency-list implementation of the
//! [`WeightedGraph`] capability; the production backings live in the
//! provider crates.

use crate::{GraphError, GraphKind, WeightedEdge, WeightedGraph};

pub(crate) struct FixtureGraph {
    kind: GraphKind,
    lists: Vec<Vec<WeightedEdge>>,
    edge_count: usize,
}

impl FixtureGraph {
    pub(crate) fn new(vertex_count: usize, kind: GraphKind) -> Self {
        Self {
            kind,
            lists: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Builds a graph from `(source, target, weight)` triples, panicking
    /// on invalid fixture data.
    pub(crate) fn from_edges(
        vertex_count: usize,
        kind: GraphKind,
        edges: &[(usize, usize, f32)],
    ) -> Self {
        let mut graph = Self::new(vertex_count, kind);
        for &(source, target, weight) in edges {
            graph
                .add_edge(source, target, weight)
                .expect("fixture edges must be valid");
        }
        graph
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

impl WeightedGraph for FixtureGraph {
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
