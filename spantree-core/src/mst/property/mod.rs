//! Property-based checks over randomly generated graphs.
//!
//! The three algorithms are independent implementations resting on the
//! same cut property, which makes them oracles for one another: their
//! trees may differ edge-by-edge when weights tie, but the total weight
//! and the edge count are uniquely determined by the graph.

mod strategies;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::{
    GraphKind, MstError, SpanningTree,
    test_utils::FixtureGraph,
    union_find::DisjointSet,
};

use super::{kruskal, lazy_prim, prim};

use self::strategies::{GraphFixture, connected_graphs, sparse_graphs};

const WEIGHT_TOLERANCE: f64 = 1e-6;

fn build(fixture: &GraphFixture) -> FixtureGraph {
    FixtureGraph::from_edges(fixture.vertex_count, GraphKind::Undirected, &fixture.edges)
}

/// Counts connected components with a union-find over the raw edges.
fn component_count(fixture: &GraphFixture) -> Result<usize, MstError> {
    let mut components = DisjointSet::new(fixture.vertex_count);
    for &(source, target, _) in &fixture.edges {
        components.union(source, target)?;
    }
    Ok(components.set_count())
}

/// A spanning tree must never connect two already-connected vertices.
fn assert_acyclic(tree: &SpanningTree, vertex_count: usize) -> Result<(), TestCaseError> {
    let mut components = DisjointSet::new(vertex_count);
    for edge in tree.edges() {
        let joined = components.union(edge.source(), edge.target())?;
        prop_assert!(joined, "tree edge {edge:?} closed a cycle");
    }
    Ok(())
}

proptest! {
    #[test]
    fn algorithms_agree_on_connected_graphs(fixture in connected_graphs()) {
        let graph = build(&fixture);
        let by_lazy_prim = lazy_prim(&graph)?;
        let by_prim = prim(&graph)?;
        let by_kruskal = kruskal(&graph)?;

        for tree in [&by_lazy_prim, &by_prim, &by_kruskal] {
            prop_assert!(tree.spans(fixture.vertex_count));
            assert_acyclic(tree, fixture.vertex_count)?;
        }
        prop_assert!(
            (by_lazy_prim.total_weight() - by_prim.total_weight()).abs() < WEIGHT_TOLERANCE
        );
        prop_assert!(
            (by_prim.total_weight() - by_kruskal.total_weight()).abs() < WEIGHT_TOLERANCE
        );
    }

    #[test]
    fn kruskal_spans_each_component(fixture in sparse_graphs()) {
        let graph = build(&fixture);
        let forest = kruskal(&graph)?;
        let components = component_count(&fixture)?;

        prop_assert_eq!(
            forest.edges().len(),
            fixture.vertex_count - components,
            "a forest holds vertex_count - component_count edges"
        );
        assert_acyclic(&forest, fixture.vertex_count)?;
    }

    #[test]
    fn cycle_property_holds_for_every_edge(fixture in connected_graphs()) {
        // For any graph edge (u, v, w), the tree path between u and v
        // uses only edges of weight <= w. Equivalent check: the tree
        // edges no heavier than w already connect u and v.
        let graph = build(&fixture);
        let tree = kruskal(&graph)?;

        for candidate in &fixture.edges {
            let (source, target, weight) = *candidate;
            if source == target {
                continue;
            }
            let mut components = DisjointSet::new(fixture.vertex_count);
            for edge in tree.edges() {
                if edge.weight() <= weight {
                    components.union(edge.source(), edge.target())?;
                }
            }
            let connected = components.is_connected(source, target)?;
            prop_assert!(
                connected,
                "tree edges no heavier than {weight} must already connect \
                 {source} and {target}"
            );
        }
    }
}
