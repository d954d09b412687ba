/*!
# Minimum Spanning Trees

Prim's algorithm grows a single tree from a start vertex using the [`IndexedPriorityQueue`];
Kruskal's algorithm scans edges by increasing weight and merges components with [`UnionFind`].

Both only apply to undirected graphs. On connected graphs they produce trees of identical total
weight (edge sets may differ under weight ties). On disconnected graphs Prim spans the component of
its start vertex while Kruskal returns a spanning forest.
*/

use std::collections::BTreeSet;

use ordered_float::OrderedFloat;

use super::*;

/// Edge set and total weight of a minimum spanning tree (or forest).
/// Edges are stored normalized, i.e. as unordered pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimumSpanningTree<V: Vertex> {
    edges: BTreeSet<Edge<V>>,
    weight: Weight,
}

impl<V: Vertex> Default for MinimumSpanningTree<V> {
    fn default() -> Self {
        Self {
            edges: BTreeSet::new(),
            weight: 0.0,
        }
    }
}

impl<V: Vertex> MinimumSpanningTree<V> {
    fn add(&mut self, u: &V, v: &V, weight: Weight) {
        tracing::trace!(?u, ?v, weight, "selected spanning tree edge");
        self.edges.insert(Edge(u.clone(), v.clone()).normalized());
        self.weight += weight;
    }

    /// Returns the selected edges (normalized)
    pub fn edges(&self) -> &BTreeSet<Edge<V>> {
        &self.edges
    }

    /// Returns the sum of all selected edge weights
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns the number of selected edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns *true* if no edge was selected
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns *true* if the unordered pair `{u, v}` was selected
    pub fn contains(&self, u: &V, v: &V) -> bool {
        self.edges.contains(&Edge(u.clone(), v.clone()).normalized())
    }

    /// Splits into edge set and total weight
    pub fn into_parts(self) -> (BTreeSet<Edge<V>>, Weight) {
        (self.edges, self.weight)
    }
}

/// Minimum spanning tree algorithms for undirected graphs.
/// Both fail with [`GraphError::NotUndirected`] on directed graphs.
pub trait SpanningTree: WeightedAdjacency {
    /// Prim's algorithm from `start` (or the first vertex in storage order).
    /// Returns an empty tree of weight `0` for an empty graph.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(
    ///     ["A", "B", "C", "D"],
    ///     [("A", "B", 10.0), ("B", "C", 1.0), ("C", "D", 2.0), ("D", "A", 5.0)],
    ///     true,
    /// ).unwrap();
    ///
    /// let mst = g.prim_mst(None).unwrap();
    /// assert_eq!(mst.weight(), 8.0);
    /// assert!(mst.contains(&"A", &"D"));
    /// assert!(!mst.contains(&"A", &"B"));
    /// ```
    fn prim_mst(&self, start: Option<&Self::Vertex>) -> Result<MinimumSpanningTree<Self::Vertex>>;

    /// Kruskal's algorithm; stops as soon as `n - 1` edges are selected.
    fn kruskal_mst(&self) -> Result<MinimumSpanningTree<Self::Vertex>>;
}

impl<G: WeightedAdjacency> SpanningTree for G {
    fn prim_mst(&self, start: Option<&Self::Vertex>) -> Result<MinimumSpanningTree<Self::Vertex>> {
        if self.is_directed() {
            return Err(GraphError::NotUndirected);
        }

        let mut tree = MinimumSpanningTree::default();
        let start = match start {
            Some(s) => self.index_of(s)?,
            None if self.is_empty() => return Ok(tree),
            None => 0,
        };

        let n = self.len();
        let mut connected = vec![false; n];
        let mut num_connected = 1;
        connected[start] = true;

        // (weight, tree vertex, candidate); stale candidates are skipped when popped
        let mut queue =
            IndexedPriorityQueue::<(OrderedFloat<Weight>, VertexIndex, VertexIndex)>::new();
        for (v, w) in self.neighbors_at(start) {
            queue.insert((OrderedFloat(w), start, v));
        }

        while num_connected < n {
            let Some((OrderedFloat(w), u, v)) = queue.pop() else {
                break;
            };
            if connected[v] {
                continue;
            }

            connected[v] = true;
            num_connected += 1;
            tree.add(self.vertex_at(u), self.vertex_at(v), w);

            for (x, wx) in self.neighbors_at(v) {
                if !connected[x] {
                    queue.insert((OrderedFloat(wx), v, x));
                }
            }
        }

        Ok(tree)
    }

    fn kruskal_mst(&self) -> Result<MinimumSpanningTree<Self::Vertex>> {
        if self.is_directed() {
            return Err(GraphError::NotUndirected);
        }

        let mut edges = self.arcs().filter(|&(u, v, _)| u < v).collect_vec();
        edges.sort_by(|a, b| a.2.total_cmp(&b.2));

        let mut components = UnionFind::from_elements(self.vertex_indices());
        let mut tree = MinimumSpanningTree::default();
        let target = self.len().saturating_sub(1);

        for (u, v, w) in edges {
            if tree.len() == target {
                break;
            }
            if components.union(&u, &v)? {
                tree.add(self.vertex_at(u), self.vertex_at(v), w);
            }
        }

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    type Case = (
        Vec<&'static str>,
        Vec<(&'static str, &'static str, Weight)>,
        Vec<(&'static str, &'static str)>,
        Weight,
    );

    fn connected_cases() -> Vec<Case> {
        vec![
            (
                vec!["A", "B", "C"],
                vec![("A", "B", 1.0), ("B", "C", 2.0)],
                vec![("A", "B"), ("B", "C")],
                3.0,
            ),
            (
                vec!["A", "B", "C", "D"],
                vec![("A", "B", 10.0), ("B", "C", 1.0), ("C", "D", 2.0), ("D", "A", 5.0)],
                vec![("B", "C"), ("C", "D"), ("A", "D")],
                8.0,
            ),
            (
                vec!["A", "B", "C", "D"],
                vec![
                    ("A", "B", 1.0),
                    ("B", "C", 2.0),
                    ("C", "D", 3.0),
                    ("D", "A", 4.0),
                    ("B", "D", 5.0),
                ],
                vec![("A", "B"), ("B", "C"), ("C", "D")],
                6.0,
            ),
            (
                vec!["A", "B", "C", "D", "E"],
                vec![
                    ("A", "B", 3.0),
                    ("A", "C", 1.0),
                    ("B", "C", 7.0),
                    ("B", "D", 5.0),
                    ("C", "D", 8.0),
                    ("D", "E", 2.0),
                ],
                vec![("A", "C"), ("A", "B"), ("B", "D"), ("D", "E")],
                11.0,
            ),
            (
                vec!["A", "B", "C", "D", "E", "F", "G", "H"],
                vec![
                    ("A", "B", 8.0),
                    ("B", "C", 10.0),
                    ("C", "D", 3.0),
                    ("D", "E", 4.0),
                    ("E", "F", 12.0),
                    ("F", "G", 7.0),
                    ("G", "H", 2.0),
                    ("H", "A", 5.0),
                    ("B", "E", 6.0),
                    ("C", "F", 1.0),
                    ("D", "G", 9.0),
                ],
                vec![
                    ("C", "F"),
                    ("G", "H"),
                    ("C", "D"),
                    ("D", "E"),
                    ("H", "A"),
                    ("F", "G"),
                    ("E", "B"),
                ],
                28.0,
            ),
        ]
    }

    #[test]
    fn known_trees() {
        for (vertices, edges, expected, weight) in connected_cases() {
            let graph = Graph::from_edges(vertices, edges, true).unwrap();
            let expected: BTreeSet<_> = expected
                .into_iter()
                .map(|(u, v)| Edge(u, v).normalized())
                .collect();

            for mst in [graph.prim_mst(None).unwrap(), graph.kruskal_mst().unwrap()] {
                assert_eq!(mst.edges(), &expected);
                assert_eq!(mst.weight(), weight);
            }
        }
    }

    #[test]
    fn disconnected_graphs() {
        let graph = Graph::from_edges(
            ["A", "B", "C", "D", "E"],
            [("A", "B", 1.0), ("B", "C", 3.0), ("D", "E", 2.0)],
            true,
        )
        .unwrap();

        let prim = graph.prim_mst(None).unwrap();
        assert_eq!(prim.len(), 2);
        assert_eq!(prim.weight(), 4.0);

        let prim = graph.prim_mst(Some(&"E")).unwrap();
        assert_eq!(prim.edges().iter().collect_vec(), vec![&Edge("D", "E")]);

        let kruskal = graph.kruskal_mst().unwrap();
        assert_eq!(kruskal.len(), 3);
        assert_eq!(kruskal.weight(), 6.0);
    }

    #[test]
    fn degenerate_inputs() {
        let empty = Graph::<&str>::undirected();
        assert!(empty.prim_mst(None).unwrap().is_empty());
        assert_eq!(empty.kruskal_mst().unwrap().weight(), 0.0);

        let directed = Graph::from_edges(["A", "B"], [("A", "B", 1.0)], false).unwrap();
        assert_eq!(directed.prim_mst(None), Err(GraphError::NotUndirected));
        assert_eq!(directed.kruskal_mst(), Err(GraphError::NotUndirected));

        let graph = Graph::from_edges(["A", "B"], [("A", "B", 1.0)], true).unwrap();
        assert!(graph.prim_mst(Some(&"X")).is_err());
    }

    #[test]
    fn prim_and_kruskal_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(51);
        for n in [2usize, 10, 40] {
            for m in [n, 5 * n] {
                for _ in 0..5 {
                    let mut graph = random_graph(rng, n, m, true, -5.0..20.0);
                    for u in 1..n {
                        if !graph.has_edge(&(u - 1), &u).unwrap() {
                            graph.add_edge(&(u - 1), &u, 20.0).unwrap();
                        }
                    }

                    let prim = graph.prim_mst(None).unwrap();
                    let kruskal = graph.kruskal_mst().unwrap();

                    assert_eq!(prim.len(), n - 1);
                    assert_eq!(kruskal.len(), n - 1);
                    assert_close(prim.weight(), kruskal.weight());

                    for start in graph.vertices() {
                        assert_close(graph.prim_mst(Some(start)).unwrap().weight(), prim.weight());
                    }
                }
            }
        }
    }
}
