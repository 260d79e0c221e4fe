//! Errors shared by the graph capability and its consumers.
//!
//! Every error here signals caller misuse and is surfaced synchronously at
//! the point of the offending call; none of them is produced by an
//! otherwise-valid computation.

use core::fmt;

/// Errors raised by [`crate::WeightedGraph`] operations and by
/// [`crate::WeightedEdge::other_endpoint`].
///
/// `Display` and `Error` are implemented by hand: `thiserror` treats any
/// field named `source` as the error's cause, but here `source` is a plain
/// vertex id mandated by the spec.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// A vertex id fell outside `0..vertex_count`.
    VertexOutOfBounds {
        /// The offending vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge weight was NaN or infinite.
    NonFiniteWeight {
        /// The source endpoint of the rejected edge.
        source: usize,
        /// The target endpoint of the rejected edge.
        target: usize,
    },
    /// A vertex was queried against an edge it does not lie on.
    NotAnEndpoint {
        /// The vertex that lies on neither end of the edge.
        vertex: usize,
        /// The edge's source endpoint.
        source: usize,
        /// The edge's target endpoint.
        target: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexOutOfBounds {
                vertex,
                vertex_count,
            } => write!(
                f,
                "vertex {vertex} is out of bounds, vertex_count is {vertex_count}"
            ),
            Self::NonFiniteWeight { source, target } => {
                write!(f, "edge ({source}, {target}) has non-finite weight")
            }
            Self::NotAnEndpoint {
                vertex,
                source,
                target,
            } => write!(
                f,
                "vertex {vertex} is not an endpoint of edge ({source}, {target})"
            ),
        }
    }
}

impl core::error::Error for GraphError {}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::VertexOutOfBounds { .. } => GraphErrorCode::VertexOutOfBounds,
            Self::NonFiniteWeight { .. } => GraphErrorCode::NonFiniteWeight,
            Self::NotAnEndpoint { .. } => GraphErrorCode::NotAnEndpoint,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// A vertex id fell outside the graph's bounds.
    VertexOutOfBounds,
    /// An edge weight was NaN or infinite.
    NonFiniteWeight,
    /// A vertex was queried against an edge it does not lie on.
    NotAnEndpoint,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexOutOfBounds => "GRAPH_VERTEX_OUT_OF_BOUNDS",
            Self::NonFiniteWeight => "GRAPH_NON_FINITE_WEIGHT",
            Self::NotAnEndpoint => "GRAPH_NOT_AN_ENDPOINT",
        }
    }
}
