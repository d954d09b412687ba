use super::*;

/// Hop distances from `source`; the first discovery of a vertex fixes its predecessor
pub(crate) fn bfs_at<G: WeightedAdjacency>(graph: &G, source: VertexIndex) -> PathLabels {
    let mut labels = PathLabels::new(graph.len(), source);

    for (parent, u) in BreadthFirstSearch::new(graph, source) {
        if let Some(p) = parent {
            labels.dist[u] = labels.dist[p] + 1.0;
            labels.pred[u] = Some(p);
        }
    }

    labels
}
