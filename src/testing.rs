//! Random instance generators shared by the unit tests.

use std::ops::Range;

use rand::Rng;

use crate::{ops::*, repr::*, vertex::*};

/// Creates a graph on vertices `0..n` with at most `m` edges (duplicates and self-loops
/// are dropped). Weights are drawn uniformly from `weights`.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    n: usize,
    m: usize,
    undirected: bool,
    weights: Range<Weight>,
) -> Graph<usize> {
    let mut graph = Graph::with_vertices(0..n, undirected);
    if n < 2 {
        return graph;
    }

    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v {
            continue;
        }
        let w = rng.random_range(weights.clone());
        graph.add_edge(&u, &v, w).unwrap();
    }
    graph
}

/// Creates a directed acyclic graph on vertices `0..n`: every edge points from a smaller
/// to a larger identifier.
pub fn random_dag<R: Rng>(rng: &mut R, n: usize, m: usize, weights: Range<Weight>) -> Graph<usize> {
    let mut graph = Graph::with_vertices(0..n, false);
    if n < 2 {
        return graph;
    }

    for _ in 0..m {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if u == v {
            continue;
        }
        let w = rng.random_range(weights.clone());
        graph.add_edge(&u.min(v), &u.max(v), w).unwrap();
    }
    graph
}

/// Compares two distances, treating both infinities as equal
pub fn assert_close(actual: Weight, expected: Weight) {
    if expected.is_infinite() {
        assert_eq!(actual, expected);
    } else {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }
}
