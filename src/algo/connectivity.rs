/*!
# Strongly Connected Components

Kosaraju's two-pass algorithm: a first DFS over the graph yields the finish order; a second DFS over
the reversed graph, started from roots in decreasing finish time, discovers exactly one SCC per root.

Components are numbered in the order the second pass discovers them. This numbering is a topological
order of the condensation: every edge between distinct SCCs goes from a smaller to a larger number.
[`SccGraph`] materializes that condensation.
*/

use super::{traversal::*, *};

/// Read-only view of a graph with every edge reversed
struct Reversed<'a, G>(&'a G);

impl<G: GraphVertexOrder> GraphVertexOrder for Reversed<'_, G> {
    type Vertex = G::Vertex;

    fn number_of_vertices(&self) -> usize {
        self.0.number_of_vertices()
    }

    fn vertex_at(&self, i: VertexIndex) -> &Self::Vertex {
        self.0.vertex_at(i)
    }

    fn index_of(&self, v: &Self::Vertex) -> Result<VertexIndex> {
        self.0.index_of(v)
    }

    fn is_undirected(&self) -> bool {
        self.0.is_undirected()
    }
}

impl<G: WeightedAdjacency> WeightedAdjacency for Reversed<'_, G> {
    fn absent_weight(&self) -> Weight {
        self.0.absent_weight()
    }

    fn weight_at(&self, u: VertexIndex, v: VertexIndex) -> Weight {
        self.0.weight_at(v, u)
    }
}

/// Returns the SCC number of every vertex index and the number of SCCs
pub(crate) fn scc_labels_at<G: WeightedAdjacency>(graph: &G) -> (Vec<usize>, usize) {
    let order = graph.finish_order();
    let stamps = dfs_timestamps_at(&Reversed(graph), order, true, |_, _| {});

    let labels = stamps
        .into_iter()
        .map(|stamp| stamp.and_then(|s| s.component).unwrap_or_default())
        .collect_vec();
    let count = labels.iter().max().map_or(0, |&c| c + 1);

    (labels, count)
}

/// Kosaraju SCCs and the condensation graph
pub trait Connectivity: WeightedAdjacency {
    /// Returns the strongly connected components in discovery order of the second pass,
    /// i.e. in topological order of the condensation. Vertices of a component are listed in
    /// storage order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(
    ///     ["A", "B", "C", "D"],
    ///     [("A", "B"), ("B", "A"), ("B", "C"), ("C", "D"), ("D", "C")],
    ///     false,
    /// ).unwrap();
    ///
    /// assert_eq!(g.strongly_connected_components(), vec![vec!["A", "B"], vec!["C", "D"]]);
    /// ```
    fn strongly_connected_components(&self) -> Vec<Vec<Self::Vertex>>;

    /// Returns the condensation: one vertex per SCC and an edge between two SCCs if some edge
    /// of the graph connects them
    fn scc_graph(&self) -> SccGraph<Self::Vertex>;
}

impl<G: WeightedAdjacency> Connectivity for G {
    fn strongly_connected_components(&self) -> Vec<Vec<Self::Vertex>> {
        let (labels, count) = scc_labels_at(self);

        let mut components = vec![Vec::new(); count];
        for (u, label) in labels.into_iter().enumerate() {
            components[label].push(self.vertex_at(u).clone());
        }
        components
    }

    fn scc_graph(&self) -> SccGraph<Self::Vertex> {
        let (labels, count) = scc_labels_at(self);

        let mut graph = Graph::with_vertices(0..count, false);
        let mut components = vec![Vec::new(); count];
        for (u, &label) in labels.iter().enumerate() {
            components[label].push(self.vertex_at(u).clone());
        }
        for (u, v, _) in self.arcs() {
            if labels[u] != labels[v] {
                graph.set_weight_at(labels[u], labels[v], 1.0);
            }
        }

        let membership = labels
            .into_iter()
            .enumerate()
            .map(|(u, label)| (self.vertex_at(u).clone(), label))
            .collect();

        SccGraph {
            graph,
            components,
            membership,
        }
    }
}

/// Condensation of a graph: vertex `i` stands for the `i`-th strongly connected component.
///
/// The condensation is always acyclic and `0..k` is a topological order of it.
/// It implements the read traits, so every algorithm of this crate runs on it directly.
#[derive(Debug, Clone)]
pub struct SccGraph<V> {
    graph: Graph<usize>,
    components: Vec<Vec<V>>,
    membership: FxHashMap<V, usize>,
}

impl<V: Vertex> SccGraph<V> {
    /// Returns the number of SCCs
    pub fn number_of_components(&self) -> usize {
        self.components.len()
    }

    /// Returns all SCCs indexed by component number
    pub fn components(&self) -> &[Vec<V>] {
        &self.components
    }

    /// Returns the original vertices of component `index`
    pub fn component_vertices(&self, index: usize) -> Result<&[V]> {
        self.components
            .get(index)
            .map(Vec::as_slice)
            .ok_or(GraphError::InvalidComponent {
                index,
                count: self.components.len(),
            })
    }

    /// Returns the component number of an original vertex
    pub fn component_of(&self, v: &V) -> Result<usize> {
        self.membership
            .get(v)
            .copied()
            .ok_or_else(|| GraphError::not_found(v))
    }

    /// Returns the condensation as a plain graph on `0..k` (all edges weigh `1`)
    pub fn graph(&self) -> &Graph<usize> {
        &self.graph
    }
}

impl<V: Vertex> GraphVertexOrder for SccGraph<V> {
    type Vertex = usize;

    fn number_of_vertices(&self) -> usize {
        self.graph.number_of_vertices()
    }

    fn vertex_at(&self, i: VertexIndex) -> &usize {
        self.graph.vertex_at(i)
    }

    fn index_of(&self, v: &usize) -> Result<VertexIndex> {
        self.graph.index_of(v)
    }

    fn is_undirected(&self) -> bool {
        false
    }
}

impl<V: Vertex> WeightedAdjacency for SccGraph<V> {
    fn absent_weight(&self) -> Weight {
        self.graph.absent_weight()
    }

    fn weight_at(&self, u: VertexIndex, v: VertexIndex) -> Weight {
        self.graph.weight_at(u, v)
    }

    fn neighbors_at(&self, u: VertexIndex) -> impl Iterator<Item = (VertexIndex, Weight)> + '_ {
        self.graph.neighbors_at(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn sorted_components<V: Vertex>(components: Vec<Vec<V>>) -> Vec<Vec<V>> {
        components
            .into_iter()
            .map(|c| c.into_iter().sorted().collect_vec())
            .sorted()
            .collect()
    }

    #[test]
    fn known_components() {
        let cases: Vec<(Vec<&str>, Vec<(&str, &str)>, Vec<Vec<&str>>)> = vec![
            (
                vec!["A", "B", "C"],
                vec![("A", "B"), ("B", "C")],
                vec![vec!["A"], vec!["B"], vec!["C"]],
            ),
            (
                vec!["A", "B", "C", "D"],
                vec![("A", "B"), ("B", "A"), ("C", "D"), ("D", "C")],
                vec![vec!["A", "B"], vec!["C", "D"]],
            ),
            (
                vec!["A", "B", "C", "D", "E", "F", "G", "H"],
                vec![
                    ("A", "B"),
                    ("B", "C"),
                    ("C", "A"),
                    ("B", "D"),
                    ("D", "E"),
                    ("E", "F"),
                    ("F", "D"),
                    ("G", "F"),
                    ("G", "H"),
                    ("H", "G"),
                ],
                vec![vec!["A", "B", "C"], vec!["D", "E", "F"], vec!["G", "H"]],
            ),
            (vec!["A", "B", "C"], vec![], vec![vec!["A"], vec!["B"], vec!["C"]]),
        ];

        for (vertices, edges, expected) in cases {
            let graph = Graph::from_edges(vertices, edges, false).unwrap();
            assert_eq!(
                sorted_components(graph.strongly_connected_components()),
                sorted_components(expected)
            );
        }
    }

    #[test]
    fn components_come_in_topological_order() {
        let graph = Graph::from_edges(["A", "B", "C"], [("C", "B"), ("B", "A")], false).unwrap();
        assert_eq!(graph.strongly_connected_components(), vec![vec!["C"], vec!["B"], vec!["A"]]);
    }

    #[test]
    fn condensation() {
        let graph = Graph::from_edges(
            ["A", "B", "C", "D", "E"],
            [("A", "B"), ("B", "A"), ("B", "C"), ("C", "D"), ("D", "C"), ("A", "E"), ("D", "E")],
            false,
        )
        .unwrap();
        let scc = graph.scc_graph();

        assert_eq!(scc.number_of_components(), 3);
        assert_eq!(scc.component_of(&"A").unwrap(), scc.component_of(&"B").unwrap());
        assert_eq!(scc.component_vertices(scc.component_of(&"C").unwrap()).unwrap(), &["C", "D"]);
        assert_eq!(scc.number_of_edges(), 3);

        let ab = scc.component_of(&"A").unwrap();
        let cd = scc.component_of(&"C").unwrap();
        let e = scc.component_of(&"E").unwrap();
        assert!(scc.graph().has_edge(&ab, &cd).unwrap());
        assert!(scc.graph().has_edge(&cd, &e).unwrap());
        assert!(!scc.graph().has_edge(&cd, &ab).unwrap());

        assert_eq!(
            scc.component_vertices(3),
            Err(GraphError::InvalidComponent { index: 3, count: 3 })
        );
        assert!(matches!(scc.component_of(&"X"), Err(GraphError::NotFound(_))));
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::<&str>::directed();
        assert!(graph.strongly_connected_components().is_empty());
        assert_eq!(graph.scc_graph().number_of_components(), 0);
    }

    #[test]
    fn random_condensations_are_acyclic_and_ordered() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        for n in [1usize, 5, 20, 50] {
            for m in [n, 2 * n, 4 * n] {
                let graph = random_graph(rng, n, m, false, 1.0..2.0);
                let scc = graph.scc_graph();

                assert_eq!(scc.components().iter().map(Vec::len).sum::<usize>(), n);
                for (u, v, _) in scc.arcs() {
                    assert!(u < v);
                }

                let reversed = graph.reversed();
                let reached = |g: &Graph<usize>, root: &usize| {
                    let root = g.index_of(root).unwrap();
                    g.bfs(root).map(|(_, u)| *g.vertex_at(u)).collect_vec()
                };

                // vertices within a component reach each other in both directions
                let mut forward = Vec::new();
                for component in scc.components() {
                    let ahead = reached(&graph, &component[0]);
                    let behind = reached(&reversed, &component[0]);
                    for v in component {
                        assert!(ahead.contains(v));
                        assert!(behind.contains(v));
                    }
                    forward.push(ahead);
                }

                // roots of distinct components are never mutually reachable
                let components = scc.components();
                for i in 0..components.len() {
                    for j in (i + 1)..components.len() {
                        assert!(
                            !(forward[i].contains(&components[j][0])
                                && forward[j].contains(&components[i][0]))
                        );
                    }
                }
            }
        }
    }
}
