use super::*;

/// Bellman-Ford over every directed arc (both orientations of undirected edges).
///
/// Relaxes all arcs up to `n - 1` times and stops early once a pass changes nothing.
/// A final pass that still improves a distance proves a reachable negative-weight cycle.
pub(crate) fn bellman_ford_at<G: WeightedAdjacency>(
    graph: &G,
    source: VertexIndex,
) -> Result<PathLabels> {
    let n = graph.len();
    let arcs = graph.arcs().collect_vec();
    let mut labels = PathLabels::new(n, source);

    for _ in 1..n {
        let mut changed = false;
        for &(u, v, w) in &arcs {
            changed |= labels.relax(u, v, w);
        }
        if !changed {
            return Ok(labels);
        }
    }

    if arcs.iter().any(|&(u, v, w)| labels.dist[u] + w < labels.dist[v]) {
        tracing::debug!(vertices = n, arcs = arcs.len(), "negative-weight cycle detected");
        return Err(GraphError::NegativeCycle);
    }

    Ok(labels)
}
