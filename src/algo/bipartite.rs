/*!
# Bipartiteness

A graph is bipartite if its vertices can be split into two sides such that every edge
connects both sides. The test 2-colors every BFS tree (roots get color `0`, children the
opposite color of their parent) and afterwards checks that no edge joins equal colors.
*/

use super::{traversal::*, *};

/// A trait for testing and computing bipartitions of graphs
pub trait BipartiteTest: WeightedAdjacency {
    /// Computes the BFS 2-coloring of the graph (`false` = left side, `true` = right side)
    /// if it is a valid bipartition, otherwise returns `None`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(["A", "B", "C"], [("A", "B"), ("B", "C")], true).unwrap();
    /// let sides = g.compute_bipartition().unwrap();
    /// assert_eq!(sides[&"A"], sides[&"C"]);
    /// assert_ne!(sides[&"A"], sides[&"B"]);
    /// ```
    fn compute_bipartition(&self) -> Option<FxHashMap<Self::Vertex, bool>>;

    /// Returns *true* if the graph is bipartite. Disconnected graphs are handled
    /// by coloring every component separately.
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G: WeightedAdjacency> BipartiteTest for G {
    fn compute_bipartition(&self) -> Option<FxHashMap<Self::Vertex, bool>> {
        let mut colors = vec![false; self.len()];

        let mut search = BreadthFirstSearch::unstarted(self);
        while search.try_restart_at_unvisited() {
            for (parent, u) in search.by_ref() {
                colors[u] = parent.is_some_and(|p| !colors[p]);
            }
        }

        if self.arcs().any(|(u, v, _)| colors[u] == colors[v]) {
            return None;
        }

        Some(
            colors
                .into_iter()
                .enumerate()
                .map(|(u, c)| (self.vertex_at(u).clone(), c))
                .collect(),
        )
    }
}
