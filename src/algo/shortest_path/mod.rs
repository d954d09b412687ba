/*!
# Shortest Paths

Single-source (BFS, Dijkstra, Bellman-Ford, DAG), multi-source and all-pairs
(Floyd-Warshall, Johnson) shortest paths.

Every variant shares one output shape, [`ShortestPaths`]: a distance per vertex (`+inf` if
unreachable) and a predecessor per vertex (`None` for sources and unreachable vertices).
All-pairs variants return one [`ShortestPaths`] per source vertex.

Multi-source variants reduce to the single-source case: the graph is copied into a scratch graph
with an additional portal vertex that has an arc to every source, the single-source algorithm is
run from the portal and the portal is stripped from the result. The caller's graph is never touched.
*/

use super::*;

mod bellman_ford;
mod bfs;
mod dag;
mod dijkstra;
mod floyd_warshall;
mod johnson;
mod multi_source;

pub use dijkstra::Dijkstra;
pub use johnson::JohnsonApsp;

pub(crate) use bellman_ford::bellman_ford_at;
pub(crate) use multi_source::with_portal;

/// Shortest path distances and predecessors of every vertex with respect to a fixed set of sources
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<V: Vertex> {
    distances: FxHashMap<V, Weight>,
    predecessors: FxHashMap<V, Option<V>>,
}

/// One [`ShortestPaths`] per source vertex
pub type AllPairsShortestPaths<V> = FxHashMap<V, ShortestPaths<V>>;

impl<V: Vertex> ShortestPaths<V> {
    /// Translates index-based labels into vertex-keyed maps.
    /// Only the first `graph.len()` labels are read.
    pub(crate) fn from_labels<G>(graph: &G, labels: PathLabels) -> Self
    where
        G: GraphVertexOrder<Vertex = V>,
    {
        let distances = graph
            .vertex_indices()
            .map(|u| (graph.vertex_at(u).clone(), labels.dist[u]))
            .collect();
        let predecessors = graph
            .vertex_indices()
            .map(|u| {
                (
                    graph.vertex_at(u).clone(),
                    labels.pred[u].map(|p| graph.vertex_at(p).clone()),
                )
            })
            .collect();

        Self {
            distances,
            predecessors,
        }
    }

    /// Returns the distance to `v` (`+inf` if unreachable) or `None` if `v` is unknown
    pub fn distance(&self, v: &V) -> Option<Weight> {
        self.distances.get(v).copied()
    }

    /// Returns the predecessor of `v` on a shortest path, `None` for sources,
    /// unreachable and unknown vertices
    pub fn predecessor(&self, v: &V) -> Option<&V> {
        self.predecessors.get(v)?.as_ref()
    }

    /// Returns *true* if `v` has a finite distance
    pub fn is_reachable(&self, v: &V) -> bool {
        self.distance(v).is_some_and(f64::is_finite)
    }

    /// Returns the map vertex -> distance
    pub fn distances(&self) -> &FxHashMap<V, Weight> {
        &self.distances
    }

    /// Returns the map vertex -> predecessor
    pub fn predecessors(&self) -> &FxHashMap<V, Option<V>> {
        &self.predecessors
    }

    /// Splits into the distance and predecessor maps
    pub fn into_parts(self) -> (FxHashMap<V, Weight>, FxHashMap<V, Option<V>>) {
        (self.distances, self.predecessors)
    }

    /// Reconstructs a shortest path ending in `target` by following predecessors back to a source.
    /// Returns `None` if `target` is unknown or unreachable.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(["A", "B", "C"], [("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 5.0)], false).unwrap();
    /// let paths = g.dijkstra_sssp(&"A").unwrap();
    ///
    /// assert_eq!(paths.path_to(&"C"), Some(vec!["A", "B", "C"]));
    /// assert_eq!(g.dijkstra_sssp(&"C").unwrap().path_to(&"A"), None);
    /// ```
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(p) = self.predecessor(current) {
            // predecessors of a valid result form a forest
            if path.len() > self.predecessors.len() {
                return None;
            }
            path.push(p.clone());
            current = p;
        }

        path.reverse();
        Some(path)
    }
}

/// Tentative distances and predecessors over vertex indices
#[derive(Debug, Clone)]
pub(crate) struct PathLabels {
    pub dist: Vec<Weight>,
    pub pred: Vec<Option<VertexIndex>>,
}

impl PathLabels {
    /// All vertices unreached except for `source` at distance `0`
    pub fn new(n: usize, source: VertexIndex) -> Self {
        let mut labels = Self {
            dist: vec![Weight::INFINITY; n],
            pred: vec![None; n],
        };
        labels.dist[source] = 0.0;
        labels
    }

    /// Relaxes the arc `(u, v)` and returns *true* if `v` improved
    pub fn relax(&mut self, u: VertexIndex, v: VertexIndex, weight: Weight) -> bool {
        let candidate = self.dist[u] + weight;
        if candidate < self.dist[v] {
            self.dist[v] = candidate;
            self.pred[v] = Some(u);
            true
        } else {
            false
        }
    }
}

/// Shortest path algorithms provided directly on graphs.
///
/// Single-source variants fail with [`GraphError::NotFound`] if the source is unknown;
/// multi-source variants if any source is unknown.
pub trait ShortestPath: WeightedAdjacency {
    /// Shortest paths counting hops: every edge has length `1` regardless of its weight.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(["A", "B", "C", "D"], [("A", "B"), ("B", "C"), ("C", "D")], false).unwrap();
    /// let paths = g.bfs_sssp(&"A").unwrap();
    /// assert_eq!(paths.distance(&"D"), Some(3.0));
    /// assert_eq!(paths.predecessor(&"D"), Some(&"C"));
    /// ```
    fn bfs_sssp(&self, source: &Self::Vertex) -> Result<ShortestPaths<Self::Vertex>> {
        let s = self.index_of(source)?;
        Ok(ShortestPaths::from_labels(self, bfs::bfs_at(self, s)))
    }

    /// Dijkstra's algorithm. Fails with [`GraphError::NegativeWeight`] if any edge weight is
    /// negative; see [`Dijkstra`] to disable the check.
    fn dijkstra_sssp(&self, source: &Self::Vertex) -> Result<ShortestPaths<Self::Vertex>> {
        Dijkstra::new().run(self, source)
    }

    /// Bellman-Ford. Supports negative weights; fails with [`GraphError::NegativeCycle`] if a
    /// negative-weight cycle is reachable from `source`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(["A", "B", "C"], [("A", "B", -1.0), ("B", "C", -2.0)], false).unwrap();
    /// assert_eq!(g.bellman_ford_sssp(&"A").unwrap().distance(&"C"), Some(-3.0));
    ///
    /// let cycle = Graph::from_edges(["A", "B", "C"], [("A", "B", 1.0), ("B", "C", -2.0), ("C", "A", -1.0)], false).unwrap();
    /// assert_eq!(cycle.bellman_ford_sssp(&"A"), Err(GraphError::NegativeCycle));
    /// ```
    fn bellman_ford_sssp(&self, source: &Self::Vertex) -> Result<ShortestPaths<Self::Vertex>> {
        let s = self.index_of(source)?;
        Ok(ShortestPaths::from_labels(self, bellman_ford_at(self, s)?))
    }

    /// Shortest paths by relaxing edges in topological order. The graph has to be acyclic;
    /// this is **not** verified.
    fn dag_sssp(&self, source: &Self::Vertex) -> Result<ShortestPaths<Self::Vertex>> {
        let s = self.index_of(source)?;
        Ok(ShortestPaths::from_labels(self, dag::dag_at(self, s)))
    }

    /// [`ShortestPath::bfs_sssp`] from a set of sources: every vertex gets the hop distance to its
    /// closest source.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(["A", "B", "C", "D"], [("A", "B"), ("B", "C"), ("C", "D")], false).unwrap();
    /// let paths = g.bfs_mssp(&["A", "B"]).unwrap();
    /// assert_eq!(paths.distance(&"D"), Some(2.0));
    /// assert_eq!(paths.predecessor(&"C"), Some(&"B"));
    /// assert_eq!(paths.predecessor(&"B"), None);
    /// ```
    fn bfs_mssp(&self, sources: &[Self::Vertex]) -> Result<ShortestPaths<Self::Vertex>> {
        multi_source::multi_source(self, sources, 1.0, |graph, portal| {
            Ok(bfs::bfs_at(graph, portal))
        })
    }

    /// [`ShortestPath::dijkstra_sssp`] from a set of sources
    fn dijkstra_mssp(&self, sources: &[Self::Vertex]) -> Result<ShortestPaths<Self::Vertex>> {
        let dijkstra = Dijkstra::new();
        dijkstra.validate(self)?;

        let dijkstra = dijkstra.validate_weights(false);
        multi_source::multi_source(self, sources, 0.0, |graph, portal| {
            dijkstra.run_at(graph, portal)
        })
    }

    /// [`ShortestPath::bellman_ford_sssp`] from a set of sources
    fn bellman_ford_mssp(&self, sources: &[Self::Vertex]) -> Result<ShortestPaths<Self::Vertex>> {
        multi_source::multi_source(self, sources, 0.0, |graph, portal| {
            bellman_ford_at(graph, portal)
        })
    }

    /// [`ShortestPath::dag_sssp`] from a set of sources
    fn dag_mssp(&self, sources: &[Self::Vertex]) -> Result<ShortestPaths<Self::Vertex>> {
        multi_source::multi_source(self, sources, 0.0, |graph, portal| {
            Ok(dag::dag_at(graph, portal))
        })
    }

    /// Runs [`ShortestPath::bfs_sssp`] from every vertex
    fn bfs_apsp(&self) -> AllPairsShortestPaths<Self::Vertex> {
        self.vertex_indices()
            .map(|s| {
                (
                    self.vertex_at(s).clone(),
                    ShortestPaths::from_labels(self, bfs::bfs_at(self, s)),
                )
            })
            .collect()
    }

    /// Runs [`ShortestPath::dijkstra_sssp`] from every vertex. Weights are validated once.
    fn dijkstra_apsp(&self) -> Result<AllPairsShortestPaths<Self::Vertex>> {
        let dijkstra = Dijkstra::new();
        dijkstra.validate(self)?;

        let dijkstra = dijkstra.validate_weights(false);
        self.vertex_indices()
            .map(|s| {
                Ok((
                    self.vertex_at(s).clone(),
                    ShortestPaths::from_labels(self, dijkstra.run_at(self, s)?),
                ))
            })
            .collect()
    }

    /// Runs [`ShortestPath::dag_sssp`] from every vertex
    fn dag_apsp(&self) -> AllPairsShortestPaths<Self::Vertex> {
        let order = self.finish_order();
        self.vertex_indices()
            .map(|s| {
                (
                    self.vertex_at(s).clone(),
                    ShortestPaths::from_labels(self, dag::dag_in_order(self, &order, s)),
                )
            })
            .collect()
    }

    /// Floyd-Warshall in `O(n^3)`. Fails with [`GraphError::NegativeCycle`] if any vertex ends up
    /// with a negative distance to itself.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(["A", "B", "C", "D"], [("A", "B", 1.0), ("B", "C", 2.0), ("C", "D", 3.0)], false).unwrap();
    /// let paths = g.floyd_warshall_apsp().unwrap();
    /// assert_eq!(paths[&"A"].distance(&"D"), Some(6.0));
    /// assert_eq!(paths[&"D"].distance(&"A"), Some(f64::INFINITY));
    /// ```
    fn floyd_warshall_apsp(&self) -> Result<AllPairsShortestPaths<Self::Vertex>> {
        let labels = floyd_warshall::floyd_warshall(self)?;
        Ok(labels
            .into_iter()
            .enumerate()
            .map(|(s, labels)| {
                (
                    self.vertex_at(s).clone(),
                    ShortestPaths::from_labels(self, labels),
                )
            })
            .collect())
    }
}

impl<G: WeightedAdjacency> ShortestPath for G {}
