/*!
# Maximum Flow

[`NetworkFlow`] couples a directed capacity graph with a flow table and a residual graph that is
kept up to date after every push.

## Bookkeeping
- Capacities live in a [`Graph`] whose absent sentinel is `0`, i.e. "no edge" reads as "zero capacity".
- Flow is stored once per unordered vertex pair `{u, v}` at the smaller vertex (by `Ord`):
  `flow(u, v) == -flow(v, u)`. Pushing negative flow along `u -> v` is the same as pushing
  positive flow along `v -> u`.
- The residual graph (absent sentinel `+inf`) holds `capacity(u, v) - flow(u, v)` on `u -> v`
  and `flow(u, v) + capacity(v, u)` on `v -> u`, for the orientation in which the flow is
  non-negative. Entries that drop to `0` are removed.

## Algorithms
- [`FordFulkerson`] repeatedly asks an [`AugmentingPathFinder`] for a source-sink path in the
  residual graph and pushes the path's bottleneck capacity.
- [`BfsPathFinder`] yields shortest augmenting paths, i.e. Edmonds-Karp with `O(V E^2)` augmentations
  in total. [`DfsPathFinder`] gives the classic depth-first Ford-Fulkerson.
- [`NetworkFlow::min_cut`] reads a minimum cut off the residual graph of a maximum flow.
*/

use super::{traversal::*, *};

/// Directed flow network with capacities, a flow table and a maintained residual graph.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let mut network = NetworkFlow::new(
///     ["s", "a", "b", "t"],
///     [("s", "a", 3.0), ("s", "b", 2.0), ("a", "b", 1.0), ("a", "t", 2.0), ("b", "t", 3.0)],
/// ).unwrap();
///
/// assert_eq!(network.edmonds_karp(&"s", &"t").unwrap(), 5.0);
/// assert_eq!(network.get_flow(&"t", &"b").unwrap(), -3.0);
/// ```
#[derive(Debug, Clone)]
pub struct NetworkFlow<V> {
    capacities: Graph<V>,
    flows: Vec<Vec<Weight>>,
    residual: Graph<V>,
}

impl<V: Vertex> NetworkFlow<V> {
    /// Creates a network from a vertex set and `(u, v, capacity)` triples without any flow.
    /// Fails with *not-found* if an edge references a vertex missing from `vertices`.
    pub fn new<E>(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self>
    where
        E: Into<WeightedEdge<V>>,
    {
        let capacities = Graph::from_edges_with_default_weight(vertices, edges, false, 0.0)?;
        Ok(Self::from_capacities(capacities))
    }

    fn from_capacities(capacities: Graph<V>) -> Self {
        let n = capacities.len();
        let mut network = Self {
            capacities,
            flows: vec![vec![0.0; n]; n],
            residual: Graph::directed(),
        };
        network.residual = network.compute_residual_graph();
        network
    }

    /// Returns the capacity graph (absent sentinel `0`)
    pub fn capacities(&self) -> &Graph<V> {
        &self.capacities
    }

    /// Returns the capacity of `u -> v`, `0` if there is no such edge
    pub fn capacity(&self, u: &V, v: &V) -> Result<Weight> {
        self.capacities.edge_weight(u, v)
    }

    /// Returns the residual graph as maintained incrementally by [`NetworkFlow::add_flow`]
    pub fn residual_graph(&self) -> &Graph<V> {
        &self.residual
    }

    /// Returns the net flow along `u -> v`; negative if the flow runs from `v` to `u`
    pub fn get_flow(&self, u: &V, v: &V) -> Result<Weight> {
        Ok(self.flow_at(self.index_of(u)?, self.index_of(v)?))
    }

    /// Returns the net flow leaving `v`
    pub fn outflow(&self, v: &V) -> Result<Weight> {
        let u = self.index_of(v)?;
        Ok(self.vertex_indices().map(|x| self.flow_at(u, x)).sum())
    }

    /// Pushes `flow` units along `u -> v`.
    ///
    /// Negative amounts are pushed as positive flow along `v -> u`. The check is on the resulting
    /// net flow: it fails with [`GraphError::NoSuchEdge`] if the net flow runs along an edge without
    /// capacity and with [`GraphError::ExceedsCapacity`] if it exceeds that edge's capacity.
    /// Cancelling existing flow back to `0` is always allowed.
    /// Only the residual entries of the pair `{u, v}` are updated.
    pub fn add_flow(&mut self, u: &V, v: &V, flow: Weight) -> Result<()> {
        let (u, v) = (self.index_of(u)?, self.index_of(v)?);
        self.add_flow_at(u, v, flow)
    }

    /// Pushes `flow` units along every consecutive pair of `path`.
    /// Pushes made before a failing pair are kept.
    pub fn add_flow_path(&mut self, path: &[V], flow: Weight) -> Result<()> {
        for (u, v) in path.iter().tuple_windows() {
            self.add_flow(u, v, flow)?;
        }
        Ok(())
    }

    /// Rebuilds the residual graph from the capacity and flow tables.
    /// Always agrees with [`NetworkFlow::residual_graph`].
    pub fn compute_residual_graph(&self) -> Graph<V> {
        let mut residual = Graph::with_vertices(self.capacities.vertices().cloned(), false);

        for (u, v, capacity) in self.capacities.arcs() {
            let flow = self.flow_at(u, v);
            if flow < 0.0 {
                continue;
            }
            if flow > 0.0 {
                residual.set_weight_at(v, u, flow + self.capacities.weight_at(v, u));
            }
            if capacity - flow > 0.0 {
                residual.set_weight_at(u, v, capacity - flow);
            }
        }

        residual
    }

    /// Computes a maximum flow from `source` to `sink` with Edmonds-Karp, on top of any flow
    /// already present, and returns the amount of flow added.
    pub fn edmonds_karp(&mut self, source: &V, sink: &V) -> Result<Weight> {
        FordFulkerson::new(BfsPathFinder).max_flow(self, source, sink)
    }

    /// Returns the source side of a minimum `source`-sink cut and its capacity.
    ///
    /// The source side is everything reachable from `source` in the residual graph, so the
    /// result is only a minimum cut once the current flow is maximum.
    pub fn min_cut(&self, source: &V) -> Result<FlowCut<V>> {
        let s = self.index_of(source)?;

        let mut search = BreadthFirstSearch::new(&self.residual, s);
        search.by_ref().for_each(drop);
        let (inside, outside): (Vec<_>, Vec<_>) =
            self.vertex_indices().partition(|&u| search.did_visit(u));

        let capacity: Weight = inside
            .iter()
            .cartesian_product(outside.iter())
            .map(|(&u, &v)| self.capacities.weight_at(u, v))
            .sum();

        Ok(FlowCut {
            source_side: inside.into_iter().map(|u| self.vertex_at(u).clone()).collect(),
            capacity,
        })
    }

    fn flow_at(&self, u: VertexIndex, v: VertexIndex) -> Weight {
        if self.vertex_at(u) < self.vertex_at(v) {
            self.flows[u][v]
        } else {
            -self.flows[v][u]
        }
    }

    fn add_flow_at(&mut self, u: VertexIndex, v: VertexIndex, flow: Weight) -> Result<()> {
        let net = self.checked_flow_at(u, v, flow)?;
        self.set_flow_at(u, v, net);
        Ok(())
    }

    /// Returns the net flow along `u -> v` after pushing `flow` more units.
    ///
    /// The net flow must lie within `[-capacity(v, u), capacity(u, v)]`; a net flow of `0` only
    /// needs capacity in one of the two directions.
    fn checked_flow_at(&self, u: VertexIndex, v: VertexIndex, flow: Weight) -> Result<Weight> {
        let net = self.flow_at(u, v) + flow;
        let (from, to, amount) = if net < 0.0 { (v, u, -net) } else { (u, v, net) };

        let capacity = self.capacities.weight_at(from, to);
        if capacity == 0.0 && (amount > 0.0 || self.capacities.weight_at(to, from) == 0.0) {
            return Err(GraphError::NoSuchEdge {
                from: format!("{:?}", self.vertex_at(from)),
                to: format!("{:?}", self.vertex_at(to)),
            });
        }
        if amount > capacity {
            return Err(GraphError::ExceedsCapacity {
                from: format!("{:?}", self.vertex_at(from)),
                to: format!("{:?}", self.vertex_at(to)),
                flow: amount,
                capacity,
            });
        }

        Ok(net)
    }

    fn set_flow_at(&mut self, u: VertexIndex, v: VertexIndex, net: Weight) {
        if self.vertex_at(u) < self.vertex_at(v) {
            self.flows[u][v] = net;
        } else {
            self.flows[v][u] = -net;
        }
        self.update_residual_at(u, v);
    }

    fn update_residual_at(&mut self, u: VertexIndex, v: VertexIndex) {
        let flow = self.flow_at(u, v);
        if flow < 0.0 {
            return self.update_residual_at(v, u);
        }

        let forward = self.capacities.weight_at(u, v) - flow;
        let backward = flow + self.capacities.weight_at(v, u);

        for (x, y, w) in [(u, v, forward), (v, u, backward)] {
            let w = if w > 0.0 { w } else { ABSENT };
            self.residual.set_weight_at(x, y, w);
        }
    }
}

impl<V: Vertex> GraphVertexOrder for NetworkFlow<V> {
    type Vertex = V;

    fn number_of_vertices(&self) -> usize {
        self.capacities.number_of_vertices()
    }

    fn vertex_at(&self, i: VertexIndex) -> &V {
        self.capacities.vertex_at(i)
    }

    fn index_of(&self, v: &V) -> Result<VertexIndex> {
        self.capacities.index_of(v)
    }

    fn is_undirected(&self) -> bool {
        false
    }
}

impl<V: Vertex> WeightedAdjacency for NetworkFlow<V> {
    fn absent_weight(&self) -> Weight {
        self.capacities.absent_weight()
    }

    fn weight_at(&self, u: VertexIndex, v: VertexIndex) -> Weight {
        self.capacities.weight_at(u, v)
    }

    fn neighbors_at(&self, u: VertexIndex) -> impl Iterator<Item = (VertexIndex, Weight)> + '_ {
        self.capacities.neighbors_at(u)
    }
}

/// Source side and capacity of a `source`-sink cut
#[derive(Debug, Clone, PartialEq)]
pub struct FlowCut<V> {
    pub source_side: Vec<V>,
    pub capacity: Weight,
}

/// Strategy to find augmenting paths in a residual graph
pub trait AugmentingPathFinder {
    /// Returns the vertex indices of a path from `source` to `sink` in `residual` or `None`
    /// if the sink is unreachable
    fn find_path<G: WeightedAdjacency>(
        &self,
        residual: &G,
        source: VertexIndex,
        sink: VertexIndex,
    ) -> Option<Vec<VertexIndex>>;
}

/// Shortest (fewest edges) augmenting paths; turns [`FordFulkerson`] into Edmonds-Karp
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPathFinder;

impl AugmentingPathFinder for BfsPathFinder {
    fn find_path<G: WeightedAdjacency>(
        &self,
        residual: &G,
        source: VertexIndex,
        sink: VertexIndex,
    ) -> Option<Vec<VertexIndex>> {
        let mut parents = vec![None; residual.len()];
        for (parent, u) in BreadthFirstSearch::new(residual, source) {
            parents[u] = parent;
            if u == sink {
                return Some(walk_back(&parents, sink));
            }
        }
        None
    }
}

/// Depth-first augmenting paths
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsPathFinder;

impl AugmentingPathFinder for DfsPathFinder {
    fn find_path<G: WeightedAdjacency>(
        &self,
        residual: &G,
        source: VertexIndex,
        sink: VertexIndex,
    ) -> Option<Vec<VertexIndex>> {
        let mut parents = vec![None; residual.len()];
        let stamps = dfs_timestamps_at(residual, [source], false, |u, parent| parents[u] = parent);
        stamps[sink].map(|_| walk_back(&parents, sink))
    }
}

fn walk_back(parents: &[Option<VertexIndex>], sink: VertexIndex) -> Vec<VertexIndex> {
    let mut path = vec![sink];
    let mut u = sink;
    while let Some(p) = parents[u] {
        path.push(p);
        u = p;
    }
    path.reverse();
    path
}

/// Generic Ford-Fulkerson maximum flow over an injected augmenting path strategy
#[derive(Debug, Clone, Default)]
pub struct FordFulkerson<P> {
    finder: P,
}

impl<P: AugmentingPathFinder> FordFulkerson<P> {
    pub fn new(finder: P) -> Self {
        Self { finder }
    }

    /// Pushes flow along augmenting paths until none is left and returns the total amount pushed.
    /// Returns `0` if `source == sink`.
    pub fn max_flow<V: Vertex>(
        &self,
        network: &mut NetworkFlow<V>,
        source: &V,
        sink: &V,
    ) -> Result<Weight> {
        let s = network.index_of(source)?;
        let t = network.index_of(sink)?;

        let mut total = 0.0;
        let mut augmentations = 0usize;
        while let Some(path) = self.finder.find_path(&network.residual, s, t) {
            if path.len() < 2 {
                break;
            }

            let bottleneck = path
                .iter()
                .tuple_windows()
                .map(|(&u, &v)| network.residual.weight_at(u, v))
                .fold(Weight::INFINITY, Weight::min);

            tracing::trace!(len = path.len(), bottleneck, "augmenting path");
            let pushes = path
                .iter()
                .tuple_windows()
                .map(|(&u, &v)| network.checked_flow_at(u, v, bottleneck).map(|net| (u, v, net)))
                .collect::<Result<Vec<_>>>()?;
            for (u, v, net) in pushes {
                network.set_flow_at(u, v, net);
            }

            total += bottleneck;
            augmentations += 1;
        }

        tracing::debug!(total, augmentations, "max-flow finished");
        Ok(total)
    }
}
