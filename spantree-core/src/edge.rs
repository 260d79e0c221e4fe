//! Weighted edge value type shared by every backing and algorithm.

use std::cmp::Ordering;

use crate::error::GraphError;

/// An immutable edge between two vertices carrying an `f32` weight.
///
/// For a directed graph the edge points from `source` to `target`; for an
/// undirected graph the two are interchangeable and backings store a
/// mirrored copy under each endpoint.
///
/// The ordering is total: weights compare via [`f32::total_cmp`], with
/// ties broken by `(source, target)` so that repeated runs over the same
/// graph select the same edges.
///
/// # Examples
/// ```
/// use spantree_core::WeightedEdge;
///
/// let edge = WeightedEdge::new(2, 5, 1.5);
/// assert_eq!(edge.other_endpoint(2)?, 5);
/// assert_eq!(edge.other_endpoint(5)?, 2);
/// assert!(edge.other_endpoint(4).is_err());
/// # Ok::<(), spantree_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge {
    source: usize,
    target: usize,
    weight: f32,
}

impl WeightedEdge {
    /// Creates an edge between `source` and `target` with the given weight.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: f32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the source endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the target endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f32 { self.weight }

    /// Returns the endpoint that is not `vertex`.
    ///
    /// For a self-loop both endpoints coincide and the same vertex is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotAnEndpoint`] when `vertex` lies on neither
    /// end of the edge.
    pub const fn other_endpoint(&self, vertex: usize) -> Result<usize, GraphError> {
        if vertex == self.source {
            Ok(self.target)
        } else if vertex == self.target {
            Ok(self.source)
        } else {
            Err(GraphError::NotAnEndpoint {
                vertex,
                source: self.source,
                target: self.target,
            })
        }
    }
}

impl Eq for WeightedEdge {}

impl Ord for WeightedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_weight_first() {
        let light = WeightedEdge::new(9, 8, 1.0);
        let heavy = WeightedEdge::new(0, 1, 2.0);
        assert!(light < heavy);
    }

    #[test]
    fn breaks_weight_ties_by_endpoints() {
        let a = WeightedEdge::new(0, 3, 1.0);
        let b = WeightedEdge::new(0, 4, 1.0);
        let c = WeightedEdge::new(1, 0, 1.0);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn other_endpoint_handles_self_loops() {
        let loop_edge = WeightedEdge::new(3, 3, 0.5);
        assert_eq!(loop_edge.other_endpoint(3), Ok(3));
    }

    #[test]
    fn other_endpoint_rejects_foreign_vertices() {
        let edge = WeightedEdge::new(1, 2, 0.5);
        assert_eq!(
            edge.other_endpoint(7),
            Err(GraphError::NotAnEndpoint {
                vertex: 7,
                source: 1,
                target: 2,
            })
        );
    }
}
