/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- [`BreadthFirstSearch`], a lazy BFS iterator over vertex indices with predecessor tracking,
- DFS with discovery/finish timestamps (and component labels when run over the entire graph),
- topological ordering by decreasing finish time and connected components,
- the [`Traversal`] trait exposing all of the above on vertex identifiers.

Neighbors are always explored in `neighbors()` order, i.e. vertex storage order.
*/

use super::*;
use std::collections::VecDeque;

/// Breadth-first search iterator yielding `(predecessor, vertex)` index pairs.
///
/// Vertices are marked visited when they are enqueued, so every vertex is yielded at most once
/// and its predecessor is the first vertex it was discovered from.
pub struct BreadthFirstSearch<'a, G> {
    graph: &'a G,
    visited: Vec<bool>,
    queue: VecDeque<(Option<VertexIndex>, VertexIndex)>,
}

impl<'a, G: WeightedAdjacency> BreadthFirstSearch<'a, G> {
    /// Creates a new search starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: VertexIndex) -> Self {
        let mut search = Self::unstarted(graph);
        search.visited[start] = true;
        search.queue.push_back((None, start));
        search
    }

    /// Creates a search without any root. Use [`BreadthFirstSearch::try_restart_at_unvisited`]
    /// to seed it.
    pub fn unstarted(graph: &'a G) -> Self {
        Self {
            graph,
            visited: vec![false; graph.len()],
            queue: VecDeque::new(),
        }
    }

    /// Returns *true* if `u` was discovered so far
    pub fn did_visit(&self, u: VertexIndex) -> bool {
        self.visited[u]
    }

    /// Tries to restart the search at the first unvisited vertex (in storage order)
    /// and returns *true* iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.queue.is_empty());
        match self.graph.vertex_indices().find(|&u| !self.visited[u]) {
            None => false,
            Some(u) => {
                self.visited[u] = true;
                self.queue.push_back((None, u));
                true
            }
        }
    }
}

impl<G: WeightedAdjacency> Iterator for BreadthFirstSearch<'_, G> {
    type Item = (Option<VertexIndex>, VertexIndex);

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.queue.pop_front()?;
        let u = popped.1;

        for (v, _) in self.graph.neighbors_at(u) {
            if !self.visited[v] {
                self.visited[v] = true;
                self.queue.push_back((Some(u), v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let unvisited = self.visited.iter().filter(|&&x| !x).count();
        (self.queue.len(), Some(self.queue.len() + unvisited))
    }
}

/// Discovery and finish time of a vertex in a depth-first search.
///
/// Times are `1`-based and strictly increasing over the whole search; `component` is only set
/// when the search covers the entire graph and numbers the DFS trees in the order they were started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub discovery: usize,
    pub finish: usize,
    pub component: Option<usize>,
}

/// Runs a depth-first search from every root in `roots` that is not yet visited and returns the
/// timestamps indexed by vertex (`None` for vertices never reached).
///
/// Uses an explicit stack, so the recursion depth does not depend on the graph.
/// If `label_components` is set, every started root opens a new component.
pub(crate) fn dfs_timestamps_at<G, I, F>(
    graph: &G,
    roots: I,
    label_components: bool,
    mut callback: F,
) -> Vec<Option<Timestamps>>
where
    G: WeightedAdjacency,
    I: IntoIterator<Item = VertexIndex>,
    F: FnMut(VertexIndex, Option<VertexIndex>),
{
    let n = graph.len();
    let mut stamps: Vec<Option<Timestamps>> = vec![None; n];
    let mut time = 0;
    let mut component = 0;

    // (vertex, next neighbor candidate)
    let mut stack: Vec<(VertexIndex, VertexIndex)> = Vec::new();

    for root in roots {
        if stamps[root].is_some() {
            continue;
        }

        let label = label_components.then_some(component);
        time += 1;
        stamps[root] = Some(Timestamps {
            discovery: time,
            finish: 0,
            component: label,
        });
        callback(root, None);
        stack.push((root, 0));

        while let Some((u, next)) = stack.last_mut() {
            let u = *u;
            let candidate = (*next..n).find(|&v| stamps[v].is_none() && graph.has_edge_at(u, v));

            match candidate {
                Some(v) => {
                    *next = v + 1;
                    time += 1;
                    stamps[v] = Some(Timestamps {
                        discovery: time,
                        finish: 0,
                        component: label,
                    });
                    callback(v, Some(u));
                    stack.push((v, 0));
                }
                None => {
                    time += 1;
                    if let Some(stamp) = stamps[u].as_mut() {
                        stamp.finish = time;
                    }
                    stack.pop();
                }
            }
        }

        component += 1;
    }

    stamps
}

/// Translates index-based timestamps into a vertex-keyed map, skipping unreached vertices
fn stamps_by_vertex<G: WeightedAdjacency>(
    graph: &G,
    stamps: Vec<Option<Timestamps>>,
) -> FxHashMap<G::Vertex, Timestamps> {
    stamps
        .into_iter()
        .enumerate()
        .filter_map(|(u, stamp)| Some((graph.vertex_at(u).clone(), stamp?)))
        .collect()
}

/// Provides traversal methods (BFS, DFS, topological order, components) directly on graphs
pub trait Traversal: WeightedAdjacency {
    /// Returns an iterator that traverses vertex indices reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(["a", "b", "c"], [("a", "b"), ("b", "c")], false).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).map(|(_, u)| u).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: VertexIndex) -> BreadthFirstSearch<'_, Self> {
        BreadthFirstSearch::new(self, start)
    }

    /// Breadth-first search from `start`, or from every yet unvisited vertex (in storage order)
    /// if `start` is `None`. `callback(vertex, parent)` is invoked once per visited vertex.
    ///
    /// Returns the parent of every vertex (`None` for roots and unreached vertices).
    /// Fails if `start` is not part of the graph.
    fn breadth_first_search<F>(
        &self,
        start: Option<&Self::Vertex>,
        mut callback: F,
    ) -> Result<FxHashMap<Self::Vertex, Option<Self::Vertex>>>
    where
        F: FnMut(&Self::Vertex, Option<&Self::Vertex>),
    {
        let mut parents: Vec<Option<VertexIndex>> = vec![None; self.len()];

        let mut search = match start {
            Some(s) => BreadthFirstSearch::new(self, self.index_of(s)?),
            None => BreadthFirstSearch::unstarted(self),
        };

        loop {
            for (parent, u) in search.by_ref() {
                parents[u] = parent;
                callback(self.vertex_at(u), parent.map(|p| self.vertex_at(p)));
            }

            if start.is_some() || !search.try_restart_at_unvisited() {
                break;
            }
        }

        Ok(parents
            .into_iter()
            .enumerate()
            .map(|(u, p)| {
                (
                    self.vertex_at(u).clone(),
                    p.map(|p| self.vertex_at(p).clone()),
                )
            })
            .collect())
    }

    /// Depth-first search from `start`.
    /// `callback(vertex, parent)` is invoked on discovery of every vertex.
    ///
    /// Returns the timestamps of all vertices reachable from `start` (without component labels).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(["a", "b", "c"], [("a", "b"), ("b", "c")], false).unwrap();
    ///
    /// let stamps = g.depth_first_search(&"b", |_, _| {}).unwrap();
    /// assert_eq!(stamps.len(), 2);
    /// assert_eq!((stamps[&"b"].discovery, stamps[&"b"].finish), (1, 4));
    /// assert_eq!((stamps[&"c"].discovery, stamps[&"c"].finish), (2, 3));
    /// ```
    fn depth_first_search<F>(
        &self,
        start: &Self::Vertex,
        mut callback: F,
    ) -> Result<FxHashMap<Self::Vertex, Timestamps>>
    where
        F: FnMut(&Self::Vertex, Option<&Self::Vertex>),
    {
        let s = self.index_of(start)?;
        let stamps = dfs_timestamps_at(self, [s], false, |u, p| {
            callback(self.vertex_at(u), p.map(|p| self.vertex_at(p)))
        });
        Ok(stamps_by_vertex(self, stamps))
    }

    /// Depth-first search over the entire graph: every yet unvisited vertex (in storage order)
    /// starts a new DFS tree, numbered as component.
    fn depth_first_search_entire_graph<F>(
        &self,
        mut callback: F,
    ) -> FxHashMap<Self::Vertex, Timestamps>
    where
        F: FnMut(&Self::Vertex, Option<&Self::Vertex>),
    {
        let stamps = dfs_timestamps_at(self, self.vertex_indices(), true, |u, p| {
            callback(self.vertex_at(u), p.map(|p| self.vertex_at(p)))
        });
        stamps_by_vertex(self, stamps)
    }

    /// Returns all vertex indices ordered by strictly decreasing DFS finish time
    fn finish_order(&self) -> Vec<VertexIndex> {
        let stamps = dfs_timestamps_at(self, self.vertex_indices(), false, |_, _| {});
        let mut order = self.vertex_indices().collect_vec();
        order.sort_unstable_by_key(|&u| std::cmp::Reverse(stamps[u].map_or(0, |s| s.finish)));
        order
    }

    /// Returns the vertices ordered by strictly decreasing DFS finish time.
    ///
    /// This is a topological order if the graph is a DAG. Cycles are **not** detected:
    /// on a cyclic graph some edge will point backwards in the returned order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(
    ///     ["shirt", "tie", "jacket", "belt"],
    ///     [("shirt", "tie"), ("tie", "jacket"), ("shirt", "belt"), ("belt", "jacket")],
    ///     false,
    /// ).unwrap();
    ///
    /// let order = g.topological_sort();
    /// assert_eq!(order[0], "shirt");
    /// assert_eq!(order[3], "jacket");
    /// ```
    fn topological_sort(&self) -> Vec<Self::Vertex> {
        self.finish_order()
            .into_iter()
            .map(|u| self.vertex_at(u).clone())
            .collect()
    }

    /// Returns the connected components of an undirected graph, each in DFS discovery order.
    /// Components are ordered by their first vertex in storage order.
    fn connected_components(&self) -> Result<Vec<Vec<Self::Vertex>>> {
        if self.is_directed() {
            return Err(GraphError::NotUndirected);
        }

        let mut components: Vec<Vec<Self::Vertex>> = Vec::new();
        dfs_timestamps_at(self, self.vertex_indices(), false, |u, parent| {
            if parent.is_none() {
                components.push(Vec::new());
            }
            if let Some(component) = components.last_mut() {
                component.push(self.vertex_at(u).clone());
            }
        });

        Ok(components)
    }
}

impl<G: WeightedAdjacency> Traversal for G {}
