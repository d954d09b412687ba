use super::*;

/// Finds bridges (edges whose removal disconnects their component) in undirected graphs
pub trait Bridges: WeightedAdjacency {
    /// Returns all bridges as `(parent, child)` pairs of the DFS tree, in discovery order.
    /// Fails with [`GraphError::NotUndirected`] on directed graphs.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges(
    ///     ["a", "b", "c", "d"],
    ///     [("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")],
    ///     true,
    /// ).unwrap();
    ///
    /// assert_eq!(g.compute_bridges().unwrap(), vec![Edge("c", "d")]);
    /// ```
    fn compute_bridges(&self) -> Result<Vec<Edge<Self::Vertex>>>;
}

impl<G: WeightedAdjacency> Bridges for G {
    fn compute_bridges(&self) -> Result<Vec<Edge<Self::Vertex>>> {
        if self.is_directed() {
            return Err(GraphError::NotUndirected);
        }

        let bridges = BridgeSearch::new(self).compute();
        Ok(bridges
            .into_iter()
            .map(|(u, v)| Edge(self.vertex_at(u).clone(), self.vertex_at(v).clone()))
            .collect())
    }
}

struct BridgeSearch<'a, G> {
    graph: &'a G,
    nodes_info: Vec<Option<NodeInfo>>,
    time: usize,
    bridges: Vec<(VertexIndex, VertexIndex)>,
}

impl<'a, G: WeightedAdjacency> BridgeSearch<'a, G> {
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            nodes_info: vec![None; graph.len()],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> Vec<(VertexIndex, VertexIndex)> {
        for u in self.graph.vertex_indices() {
            if self.nodes_info[u].is_none() {
                self.compute_node(None, u);
            }
        }

        self.bridges
    }

    fn compute_node(&mut self, parent: Option<VertexIndex>, u: VertexIndex) -> NodeInfo {
        self.time += 1;
        let mut info = NodeInfo {
            parent,
            discovery: self.time,
            low: self.time,
        };
        self.nodes_info[u] = Some(info);

        for (v, _) in self.graph.neighbors_at(u) {
            match self.nodes_info[v] {
                None => {
                    let info_v = self.compute_node(Some(u), v);
                    info.update_low(info_v.low);

                    if info_v.low > info.discovery {
                        self.bridges.push((u, v));
                    }
                }
                Some(info_v) if Some(v) != info.parent => info.update_low(info_v.discovery),
                Some(_) => {}
            }
            self.nodes_info[u] = Some(info);
        }

        info
    }
}

#[derive(Clone, Copy)]
struct NodeInfo {
    low: usize,
    discovery: usize,
    parent: Option<VertexIndex>,
}

impl NodeInfo {
    fn update_low(&mut self, value: usize) {
        self.low = self.low.min(value);
    }
}
