use super::*;

/// All-pairs distances and last hops via the `O(n^3)` dynamic program over intermediate vertices.
///
/// `pred[u][v]` is the vertex preceding `v` on a shortest `u -> v` path; when `k` improves `(u, v)`
/// it is inherited from `pred[k][v]`. Returns one [`PathLabels`] per source index.
pub(crate) fn floyd_warshall<G: WeightedAdjacency>(graph: &G) -> Result<Vec<PathLabels>> {
    let n = graph.len();

    let mut labels = (0..n).map(|u| PathLabels::new(n, u)).collect_vec();
    for (u, v, w) in graph.arcs() {
        labels[u].dist[v] = w;
        labels[u].pred[v] = Some(u);
    }

    for k in 0..n {
        for u in 0..n {
            let via = labels[u].dist[k];
            if via.is_infinite() {
                continue;
            }

            for v in 0..n {
                let candidate = via + labels[k].dist[v];
                if candidate < labels[u].dist[v] {
                    labels[u].dist[v] = candidate;
                    labels[u].pred[v] = labels[k].pred[v];
                }
            }
        }
    }

    if (0..n).any(|u| labels[u].dist[u] < 0.0) {
        tracing::debug!(vertices = n, "negative-weight cycle detected");
        return Err(GraphError::NegativeCycle);
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn predecessors_reconstruct_shortest_paths() {
        let graph = Graph::from_edges(
            ["A", "B", "C", "D"],
            [("A", "B", 3.0), ("A", "C", 1.0), ("C", "B", 1.0), ("B", "D", 1.0)],
            false,
        )
        .unwrap();

        let paths = graph.floyd_warshall_apsp().unwrap();
        assert_eq!(paths[&"A"].distance(&"D"), Some(3.0));
        assert_eq!(paths[&"A"].path_to(&"D"), Some(vec!["A", "C", "B", "D"]));
        assert_eq!(paths[&"C"].path_to(&"D"), Some(vec!["C", "B", "D"]));
        assert_eq!(paths[&"D"].predecessor(&"D"), None);
    }

    #[test]
    fn agrees_with_bellman_ford_on_negative_weights() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);
        for n in [2, 10, 25] {
            let dag = random_dag(rng, n, 3 * n, -5.0..10.0);
            let all = dag.floyd_warshall_apsp().unwrap();

            for s in dag.vertices() {
                let single = dag.bellman_ford_sssp(s).unwrap();
                for v in dag.vertices() {
                    assert_close(all[s].distance(v).unwrap(), single.distance(v).unwrap());
                }
            }
        }
    }

    #[test]
    fn flow_style_sentinel() {
        // absent edges read as 0 here and must not become zero-length shortcuts
        let graph = Graph::from_edges_with_default_weight(
            ["A", "B", "C"],
            [("A", "B", 2.0), ("B", "C", 3.0)],
            false,
            0.0,
        )
        .unwrap();

        let paths = graph.floyd_warshall_apsp().unwrap();
        assert_eq!(paths[&"A"].distance(&"C"), Some(5.0));
        assert_eq!(paths[&"C"].distance(&"A"), Some(Weight::INFINITY));
    }
}
