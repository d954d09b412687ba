use ordered_float::OrderedFloat;

use super::*;

/// Configuration of Dijkstra's algorithm.
///
/// Dijkstra is only correct for non-negative weights. By default every arc is checked before the
/// search starts and a negative weight fails with [`GraphError::NegativeWeight`]. Callers that
/// guarantee non-negativity themselves (e.g. on a reweighted graph) can skip the check.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let g = Graph::from_edges(["A", "B", "C"], [("A", "B", 2.0), ("B", "C", -1.0)], false).unwrap();
///
/// assert!(matches!(Dijkstra::new().run(&g, &"A"), Err(GraphError::NegativeWeight { .. })));
///
/// let unchecked = Dijkstra::new().validate_weights(false).run(&g, &"A").unwrap();
/// assert_eq!(unchecked.distance(&"C"), Some(1.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    validate_weights: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    /// Creates a configuration that validates weights
    pub fn new() -> Self {
        Self {
            validate_weights: true,
        }
    }

    /// Sets whether negative weights are rejected up front
    pub fn set_validate_weights(&mut self, validate: bool) {
        self.validate_weights = validate;
    }

    /// Sets whether negative weights are rejected up front
    pub fn validate_weights(mut self, validate: bool) -> Self {
        self.set_validate_weights(validate);
        self
    }

    /// Fails with [`GraphError::NegativeWeight`] on the first negative arc if validation is enabled
    pub fn validate<G: WeightedAdjacency>(&self, graph: &G) -> Result<()> {
        if !self.validate_weights {
            return Ok(());
        }

        match graph.arcs().find(|&(_, _, w)| w < 0.0) {
            Some((u, v, weight)) => Err(GraphError::NegativeWeight {
                from: format!("{:?}", graph.vertex_at(u)),
                to: format!("{:?}", graph.vertex_at(v)),
                weight,
            }),
            None => Ok(()),
        }
    }

    /// Computes shortest paths from `source`
    pub fn run<G: WeightedAdjacency>(
        &self,
        graph: &G,
        source: &G::Vertex,
    ) -> Result<ShortestPaths<G::Vertex>> {
        let s = graph.index_of(source)?;
        Ok(ShortestPaths::from_labels(graph, self.run_at(graph, s)?))
    }

    /// Index-based search with lazy deletion: improved vertices are queued again and stale
    /// queue entries are skipped when popped.
    pub(crate) fn run_at<G: WeightedAdjacency>(
        &self,
        graph: &G,
        source: VertexIndex,
    ) -> Result<PathLabels> {
        self.validate(graph)?;

        let mut labels = PathLabels::new(graph.len(), source);
        let mut queue = IndexedPriorityQueue::<(OrderedFloat<Weight>, VertexIndex)>::new();
        queue.insert((OrderedFloat(0.0), source));

        while let Some((OrderedFloat(dist), u)) = queue.pop() {
            if dist > labels.dist[u] {
                continue;
            }

            for (v, w) in graph.neighbors_at(u) {
                if labels.relax(u, v, w) {
                    queue.insert((OrderedFloat(labels.dist[v]), v));
                }
            }
        }

        Ok(labels)
    }
}
