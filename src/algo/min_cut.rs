/*!
# Karger's Randomized Minimum Cut

Every trial contracts uniformly random edges of an undirected multigraph until only two super vertices
remain and counts the edges between them. Contracting edges in the order of a random permutation is
the same as contracting uniformly random edges, so a trial shuffles the edge list once and merges
endpoints with a [`UnionFind`]. Weights are ignored: every edge counts `1`.

A single trial finds a fixed minimum cut with probability at least `2 / (n (n - 1))`; the default of
`n^2 * ceil(ln n)` trials makes failure unlikely but never impossible.
*/

use rand::{Rng, seq::SliceRandom};

use super::*;

/// A cut found by [`KargerMinCut`]: one side of the partition and the number of crossing edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeCut<V> {
    pub side: Vec<V>,
    pub size: usize,
}

/// Configuration of Karger's randomized minimum cut
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
/// use rand::SeedableRng;
///
/// let g = Graph::from_edges(
///     ["A", "B", "C", "D"],
///     [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A"), ("A", "C")],
///     true,
/// ).unwrap();
///
/// let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
/// let cut = KargerMinCut::new().iterations(100).run(&g, rng).unwrap();
/// assert_eq!(cut.size, 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KargerMinCut {
    iterations: Option<usize>,
}

impl KargerMinCut {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of independent trials
    pub fn set_iterations(&mut self, iterations: usize) {
        self.iterations = Some(iterations);
    }

    /// Sets the number of independent trials
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.set_iterations(iterations);
        self
    }

    /// Returns the number of trials used for a graph with `n` vertices
    pub fn trials(&self, n: usize) -> usize {
        self.iterations.unwrap_or_else(|| {
            let log = (n.max(1) as f64).ln().ceil().max(1.0) as usize;
            n * n * log
        })
    }

    /// Returns the smallest cut over all trials.
    ///
    /// Fails with [`GraphError::NotUndirected`] on directed graphs. Graphs with fewer than two
    /// vertices have no proper cut and yield all vertices on one side with size `0`.
    pub fn run<G, R>(&self, graph: &G, rng: &mut R) -> Result<EdgeCut<G::Vertex>>
    where
        G: WeightedAdjacency,
        R: Rng,
    {
        if graph.is_directed() {
            return Err(GraphError::NotUndirected);
        }

        let n = graph.len();
        if n < 2 {
            return Ok(EdgeCut {
                side: graph.vertices().cloned().collect(),
                size: 0,
            });
        }

        let mut edges = graph
            .arcs()
            .filter(|&(u, v, _)| u < v)
            .map(|(u, v, _)| (u, v))
            .collect_vec();

        let mut best: Option<(Vec<bool>, usize)> = None;
        for _ in 0..self.trials(n) {
            edges.shuffle(rng);
            let (side, size) = contract(n, &edges)?;

            if best.as_ref().is_none_or(|(_, best_size)| size < *best_size) {
                tracing::trace!(size, "improved cut");
                best = Some((side, size));
            }
        }

        let (side, size) = best.unwrap_or_else(|| (vec![true; n], 0));
        tracing::debug!(size, "karger best cut");

        Ok(EdgeCut {
            side: graph
                .vertex_indices()
                .filter(|&u| side[u])
                .map(|u| graph.vertex_at(u).clone())
                .collect(),
            size,
        })
    }
}

/// One contraction trial over an already shuffled edge list.
/// Returns the side of vertex `0` and the number of crossing edges.
fn contract(n: usize, edges: &[(VertexIndex, VertexIndex)]) -> Result<(Vec<bool>, usize)> {
    let mut components = UnionFind::from_elements(0..n);
    for (u, v) in edges {
        if components.number_of_sets() <= 2 {
            break;
        }
        components.union(u, v)?;
    }

    // more than two sets remain only if the graph is disconnected; everything outside the
    // component of `0` then forms the other side
    let mut side = vec![false; n];
    for (u, s) in side.iter_mut().enumerate() {
        *s = components.connected(&0, &u)?;
    }

    let size = edges.iter().filter(|&&(u, v)| side[u] != side[v]).count();
    Ok((side, size))
}
