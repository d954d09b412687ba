use std::fmt::Display;

use fxhash::FxHashMap;
use itertools::Itertools;

use super::*;

/// Weighted graph stored as a dense adjacency weight table over vertex identifiers.
///
/// `weight[u][v]` holds the weight of the edge `u -> v` or the absent sentinel;
/// `weight[v][v] == 0` always. The table is square over the current vertex set.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let mut graph = Graph::undirected();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
/// graph.add_edge(&"A", &"B", 4.0).unwrap();
///
/// assert_eq!(graph.edge_weight(&"B", &"A").unwrap(), 4.0);
/// assert_eq!(graph.neighbors(&"A").unwrap(), vec![(&"B", 4.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V> {
    undirected: bool,
    absent: Weight,
    vertices: Vec<V>,
    indices: FxHashMap<V, VertexIndex>,
    weights: Vec<Vec<Weight>>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<V: Vertex> Graph<V> {
    /// Creates an empty graph with `+inf` as absent sentinel
    pub fn new(undirected: bool) -> Self {
        Self::with_default_weight(undirected, ABSENT)
    }

    /// Creates an empty directed graph
    pub fn directed() -> Self {
        Self::new(false)
    }

    /// Creates an empty undirected graph
    pub fn undirected() -> Self {
        Self::new(true)
    }

    /// Creates an empty graph whose missing edges read as `absent`
    /// (e.g. `0` for capacity graphs where "no edge" means zero capacity).
    pub fn with_default_weight(undirected: bool, absent: Weight) -> Self {
        Self {
            undirected,
            absent,
            vertices: Vec::new(),
            indices: FxHashMap::default(),
            weights: Vec::new(),
        }
    }

    /// Creates a graph with the given vertices and no edges. Duplicates are ignored.
    pub fn with_vertices(vertices: impl IntoIterator<Item = V>, undirected: bool) -> Self {
        let mut graph = Self::new(undirected);
        for v in vertices {
            graph.add_vertex(v);
        }
        graph
    }

    /// Creates a graph from a vertex set and an edge list of `(u, v)` / `(u, v, w)` triples.
    /// Fails with *not-found* if an edge references a vertex missing from `vertices`.
    pub fn from_edges<E>(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
        undirected: bool,
    ) -> Result<Self>
    where
        E: Into<WeightedEdge<V>>,
    {
        Self::from_edges_with_default_weight(vertices, edges, undirected, ABSENT)
    }

    /// Same as [`Graph::from_edges`] with a custom absent sentinel
    pub fn from_edges_with_default_weight<E>(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
        undirected: bool,
        absent: Weight,
    ) -> Result<Self>
    where
        E: Into<WeightedEdge<V>>,
    {
        let mut graph = Self::with_default_weight(undirected, absent);
        for v in vertices {
            graph.add_vertex(v);
        }
        graph.add_edges(edges)?;
        Ok(graph)
    }

    /// Returns a new graph with every edge's endpoints swapped and weights preserved
    pub fn reversed(&self) -> Self {
        let n = self.len();
        let weights = (0..n)
            .map(|u| (0..n).map(|v| self.weights[v][u]).collect_vec())
            .collect_vec();

        Self {
            undirected: self.undirected,
            absent: self.absent,
            vertices: self.vertices.clone(),
            indices: self.indices.clone(),
            weights,
        }
    }

    /// Overwrites a single table entry, ignoring the `undirected` flag.
    /// Used by scoped reweighting, which has to treat both orientations separately.
    pub(crate) fn set_weight_at(&mut self, u: VertexIndex, v: VertexIndex, weight: Weight) {
        if u != v {
            self.weights[u][v] = weight;
        }
    }

    /// Switches the absent sentinel to `absent`, rewriting every missing off-diagonal entry.
    /// Returns the previous sentinel.
    pub(crate) fn replace_absent_weight(&mut self, absent: Weight) -> Weight {
        let previous = std::mem::replace(&mut self.absent, absent);
        for (u, row) in self.weights.iter_mut().enumerate() {
            for (v, w) in row.iter_mut().enumerate() {
                if u != v && *w == previous {
                    *w = absent;
                }
            }
        }
        previous
    }
}

impl<V: Vertex> GraphVertexOrder for Graph<V> {
    type Vertex = V;

    fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_at(&self, i: VertexIndex) -> &V {
        &self.vertices[i]
    }

    fn index_of(&self, v: &V) -> Result<VertexIndex> {
        self.indices
            .get(v)
            .copied()
            .ok_or_else(|| GraphError::not_found(v))
    }

    fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    fn is_undirected(&self) -> bool {
        self.undirected
    }
}

impl<V: Vertex> WeightedAdjacency for Graph<V> {
    fn absent_weight(&self) -> Weight {
        self.absent
    }

    fn weight_at(&self, u: VertexIndex, v: VertexIndex) -> Weight {
        self.weights[u][v]
    }

    fn neighbors_at(&self, u: VertexIndex) -> impl Iterator<Item = (VertexIndex, Weight)> + '_ {
        let absent = self.absent;
        self.weights[u]
            .iter()
            .copied()
            .enumerate()
            .filter(move |&(v, w)| v != u && w != absent)
    }
}

impl<V: Vertex> GraphEditing for Graph<V> {
    fn add_vertex(&mut self, v: V) -> bool {
        if self.indices.contains_key(&v) {
            return false;
        }

        let n = self.len();
        for row in &mut self.weights {
            row.push(self.absent);
        }

        let mut row = vec![self.absent; n + 1];
        row[n] = 0.0;
        self.weights.push(row);

        self.indices.insert(v.clone(), n);
        self.vertices.push(v);
        true
    }

    fn remove_vertex(&mut self, v: &V) -> Result<()> {
        let i = self.index_of(v)?;

        // the last vertex moves into slot `i` (row and column), keeping the diagonal at 0
        self.indices.remove(v);
        self.vertices.swap_remove(i);
        self.weights.swap_remove(i);
        for row in &mut self.weights {
            row.swap_remove(i);
        }

        if let Some(moved) = self.vertices.get(i) {
            self.indices.insert(moved.clone(), i);
        }
        Ok(())
    }

    fn add_edge(&mut self, u: &V, v: &V, weight: Weight) -> Result<()> {
        let (iu, iv) = (self.index_of(u)?, self.index_of(v)?);
        if iu == iv {
            tracing::trace!(vertex = ?u, "ignoring self-loop");
            return Ok(());
        }

        self.weights[iu][iv] = weight;
        if self.undirected {
            self.weights[iv][iu] = weight;
        }
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> Result<()> {
        let (iu, iv) = (self.index_of(u)?, self.index_of(v)?);
        if iu == iv {
            return Ok(());
        }

        self.weights[iu][iv] = self.absent;
        if self.undirected {
            self.weights[iv][iu] = self.absent;
        }
        Ok(())
    }
}

/// Lists the edges as `AB: 1, BC: 2`; weights are omitted if every edge weighs `1`.
impl<V: Vertex + Display> Display for Graph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let edges = self.edges();
        let unweighted = edges.iter().all(|e| e.weight() == 1.0);

        let listed = edges
            .iter()
            .map(|WeightedEdge(u, v, w)| {
                if unweighted {
                    format!("{u}{v}")
                } else {
                    format!("{u}{v}: {w}")
                }
            })
            .join(", ");

        write!(f, "{listed}")
    }
}
