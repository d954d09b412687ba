use super::*;

/// Relaxes every arc once, in topological order of its tail
pub(crate) fn dag_at<G: WeightedAdjacency>(graph: &G, source: VertexIndex) -> PathLabels {
    dag_in_order(graph, &graph.finish_order(), source)
}

/// Same as [`dag_at`] with a precomputed order (decreasing DFS finish time)
pub(crate) fn dag_in_order<G: WeightedAdjacency>(
    graph: &G,
    order: &[VertexIndex],
    source: VertexIndex,
) -> PathLabels {
    let mut labels = PathLabels::new(graph.len(), source);

    for &u in order {
        if labels.dist[u].is_infinite() {
            continue;
        }
        for (v, w) in graph.neighbors_at(u) {
            labels.relax(u, v, w);
        }
    }

    labels
}
