use std::ops::Deref;

use super::*;

/// Johnson's all-pairs shortest paths for sparse graphs with negative weights.
///
/// Needs mutable access: the edges are reweighted in place for the duration of the computation
/// and restored afterwards, on every exit path.
pub trait JohnsonApsp {
    type Vertex: Vertex;

    /// 1. computes potentials `h` with Bellman-Ford from a portal vertex joined to every vertex
    ///    by a zero-weight arc (fails with [`GraphError::NegativeCycle`]),
    /// 2. reweights every arc to `w(u, v) + h(u) - h(v) >= 0`,
    /// 3. runs Dijkstra from every vertex and translates the distances back.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::from_edges(
    ///     ["A", "B", "C"],
    ///     [("A", "B", 4.0), ("A", "C", 1.0), ("C", "B", -2.0)],
    ///     false,
    /// ).unwrap();
    ///
    /// let paths = g.johnson_apsp().unwrap();
    /// assert_eq!(paths[&"A"].distance(&"B"), Some(-1.0));
    /// assert_eq!(paths[&"A"].predecessor(&"B"), Some(&"C"));
    /// assert_eq!(g.edge_weight(&"C", &"B").unwrap(), -2.0);
    /// ```
    fn johnson_apsp(&mut self) -> Result<AllPairsShortestPaths<Self::Vertex>>;
}

impl<V: Vertex> JohnsonApsp for Graph<V> {
    type Vertex = V;

    fn johnson_apsp(&mut self) -> Result<AllPairsShortestPaths<V>> {
        let n = self.len();

        let potentials = {
            let augmented = with_portal(&*self, self.vertices(), 0.0)?;
            let mut labels = bellman_ford_at(&augmented, n)?;
            labels.dist.truncate(n);
            labels.dist
        };
        tracing::debug!(vertices = n, "computed vertex potentials");

        let reweighted = Reweighted::apply(self, &potentials);
        let dijkstra = Dijkstra::new().validate_weights(false);

        let mut result = FxHashMap::default();
        for s in reweighted.vertex_indices() {
            let mut labels = dijkstra.run_at(&*reweighted, s)?;
            for (v, dist) in labels.dist.iter_mut().enumerate() {
                if dist.is_finite() {
                    *dist += potentials[v] - potentials[s];
                }
            }
            // exact on the source regardless of rounding
            labels.dist[s] = 0.0;

            result.insert(
                reweighted.vertex_at(s).clone(),
                ShortestPaths::from_labels(&*reweighted, labels),
            );
        }

        Ok(result)
    }
}

/// Scoped reweighting of a graph. The original weight of every touched arc is recorded
/// and written back when the guard is dropped.
///
/// Reweighted arcs may weigh exactly `0`, so the graph reads missing edges as `+inf` while the
/// guard lives; its own sentinel is restored on drop.
struct Reweighted<'a, V: Vertex> {
    graph: &'a mut Graph<V>,
    original: Vec<(VertexIndex, VertexIndex, Weight)>,
    absent: Weight,
}

impl<'a, V: Vertex> Reweighted<'a, V> {
    fn apply(graph: &'a mut Graph<V>, potentials: &[Weight]) -> Self {
        let original = graph.arcs().collect_vec();
        let absent = graph.replace_absent_weight(ABSENT);
        for &(u, v, w) in &original {
            graph.set_weight_at(u, v, w + potentials[u] - potentials[v]);
        }
        tracing::trace!(arcs = original.len(), "reweighted arcs");

        Self {
            graph,
            original,
            absent,
        }
    }
}

impl<V: Vertex> Deref for Reweighted<'_, V> {
    type Target = Graph<V>;

    fn deref(&self) -> &Graph<V> {
        self.graph
    }
}

impl<V: Vertex> Drop for Reweighted<'_, V> {
    fn drop(&mut self) {
        self.graph.replace_absent_weight(self.absent);
        for (u, v, w) in self.original.drain(..) {
            self.graph.set_weight_at(u, v, w);
        }
        tracing::trace!("restored original weights");
    }
}
