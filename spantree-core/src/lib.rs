//! Spantree core library.
//!
//! A sequential library for weighted graphs of small-to-medium size:
//! minimum spanning trees (lazy Prim, Prim, Kruskal) and single-source
//! shortest paths (Dijkstra, Bellman-Ford), together with the auxiliary
//! structures they lean on (an index-addressable min-heap and a
//! union-find partition).
//!
//! Algorithms depend only on the [`WeightedGraph`] capability trait;
//! concrete backings (dense matrix, sparse adjacency list) live in the
//! provider crates.

mod edge;
mod error;
mod graph;
mod indexed_heap;
pub mod mst;
pub mod sssp;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    edge::WeightedEdge,
    error::{GraphError, GraphErrorCode},
    graph::{GraphKind, WeightedGraph},
    indexed_heap::{HeapError, HeapErrorCode, IndexedMinHeap},
    mst::{MstError, MstErrorCode, SpanningTree, kruskal, lazy_prim, prim},
    sssp::{ShortestPathTree, SsspError, SsspErrorCode, bellman_ford, dijkstra},
    union_find::{DisjointSet, DisjointSetError},
};
