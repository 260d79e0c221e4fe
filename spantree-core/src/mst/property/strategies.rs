//! Proptest strategies producing weighted graph fixtures.
//!
//! Graphs are derived from a `u64` seed through a [`SmallRng`] so that a
//! failing case shrinks to a small, reproducible seed instead of a large
//! edge list.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// A generated undirected graph as raw `(source, target, weight)` triples.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub(super) vertex_count: usize,
    pub(super) edges: Vec<(usize, usize, f32)>,
}

fn random_weight(rng: &mut SmallRng) -> f32 {
    rng.gen_range(0.0_f32..100.0)
}

/// Connected graphs: a random spanning tree first, then up to
/// `2 * vertex_count` extra edges.
pub(super) fn connected_graphs() -> impl Strategy<Value = GraphFixture> {
    (2_usize..24, any::<u64>()).prop_map(|(vertex_count, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut edges = Vec::new();
        for vertex in 1..vertex_count {
            let anchor = rng.gen_range(0..vertex);
            edges.push((anchor, vertex, random_weight(&mut rng)));
        }
        let extra = rng.gen_range(0..vertex_count * 2);
        for _ in 0..extra {
            let source = rng.gen_range(0..vertex_count);
            let target = rng.gen_range(0..vertex_count);
            if source != target {
                edges.push((source, target, random_weight(&mut rng)));
            }
        }
        GraphFixture {
            vertex_count,
            edges,
        }
    })
}

/// Arbitrary graphs: a random edge set with no connectivity guarantee,
/// self-loops permitted.
pub(super) fn sparse_graphs() -> impl Strategy<Value = GraphFixture> {
    (1_usize..24, any::<u64>()).prop_map(|(vertex_count, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let edge_count = rng.gen_range(0..vertex_count * 2);
        let edges = (0..edge_count)
            .map(|_| {
                (
                    rng.gen_range(0..vertex_count),
                    rng.gen_range(0..vertex_count),
                    random_weight(&mut rng),
                )
            })
            .collect();
        GraphFixture {
            vertex_count,
            edges,
        }
    })
}
