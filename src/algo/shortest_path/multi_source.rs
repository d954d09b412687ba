use super::*;

/// Copies `graph` into a scratch graph with one extra [`Augmented::Portal`] vertex that has an
/// outgoing arc of weight `weight` to each of `targets`.
///
/// The portal is stored last, so `Original` vertices keep their indices. Portal arcs are
/// directed even if the graph is undirected. The copy always reads missing edges as `+inf`,
/// so zero-weight portal arcs stay edges whatever the sentinel of `graph` is.
pub(crate) fn with_portal<'a, G, I>(
    graph: &G,
    targets: I,
    weight: Weight,
) -> Result<Graph<Augmented<G::Vertex>>>
where
    G: WeightedAdjacency,
    G::Vertex: 'a,
    I: IntoIterator<Item = &'a G::Vertex>,
{
    let targets: Vec<VertexIndex> = targets
        .into_iter()
        .map(|v| graph.index_of(v))
        .try_collect()?;

    let mut augmented = Graph::new(graph.is_undirected());
    for v in graph.vertices() {
        augmented.add_vertex(Augmented::Original(v.clone()));
    }
    augmented.add_vertex(Augmented::Portal);

    for (u, v, w) in graph.arcs() {
        augmented.set_weight_at(u, v, w);
    }

    let portal = graph.len();
    for t in targets {
        augmented.set_weight_at(portal, t, weight);
    }

    tracing::trace!(vertices = portal, weight, "built scratch graph with portal vertex");
    Ok(augmented)
}

/// Runs a single-source algorithm from a portal joined to `sources` by arcs of weight
/// `portal_weight`, then strips the portal: its distance label is dropped, predecessors pointing
/// at it become `None` and `portal_weight` is subtracted from every distance.
pub(crate) fn multi_source<G, F>(
    graph: &G,
    sources: &[G::Vertex],
    portal_weight: Weight,
    run: F,
) -> Result<ShortestPaths<G::Vertex>>
where
    G: WeightedAdjacency,
    F: FnOnce(&Graph<Augmented<G::Vertex>>, VertexIndex) -> Result<PathLabels>,
{
    let augmented = with_portal(graph, sources, portal_weight)?;
    let portal = graph.len();

    let mut labels = run(&augmented, portal)?;
    labels.dist.truncate(portal);
    labels.pred.truncate(portal);

    for dist in labels.dist.iter_mut() {
        *dist -= portal_weight;
    }
    for pred in labels.pred.iter_mut() {
        if *pred == Some(portal) {
            *pred = None;
        }
    }

    Ok(ShortestPaths::from_labels(graph, labels))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portal_copy_keeps_original_untouched() {
        let graph = Graph::from_edges(
            ["A", "B", "C", "D"],
            [("A", "B", 1.0), ("B", "C", 2.0), ("C", "D", 3.0)],
            true,
        )
        .unwrap();
        let augmented = with_portal(&graph, [&"A", &"C"], 0.0).unwrap();

        assert_eq!(augmented.len(), 5);
        assert_eq!(augmented.index_of(&Augmented::Portal).unwrap(), 4);
        assert_eq!(
            augmented.neighbors(&Augmented::Portal).unwrap(),
            vec![(&Augmented::Original("A"), 0.0), (&Augmented::Original("C"), 0.0)]
        );
        // portal arcs are one-way
        assert!(
            !augmented
                .has_edge(&Augmented::Original("A"), &Augmented::Portal)
                .unwrap()
        );
        assert_eq!(
            augmented
                .edge_weight(&Augmented::Original("C"), &Augmented::Original("B"))
                .unwrap(),
            2.0
        );

        assert_eq!(graph.len(), 4);
        assert!(with_portal(&graph, [&"Z"], 0.0).is_err());
    }

    #[test]
    fn zero_sentinel_graph_matches_single_source() {
        let graph = Graph::from_edges_with_default_weight(
            ["A", "B", "C", "D"],
            [("A", "B", 2.0), ("B", "C", 1.0), ("A", "C", 4.0), ("C", "D", 3.0)],
            false,
            0.0,
        )
        .unwrap();

        let augmented = with_portal(&graph, [&"A"], 0.0).unwrap();
        assert!(augmented.has_edge(&Augmented::Portal, &Augmented::Original("A")).unwrap());

        let dijkstra = graph.dijkstra_sssp(&"A").unwrap();
        assert_eq!(dijkstra.distance(&"D"), Some(6.0));
        for paths in [
            graph.dijkstra_mssp(&["A"]).unwrap(),
            graph.bellman_ford_mssp(&["A"]).unwrap(),
            graph.dag_mssp(&["A"]).unwrap(),
        ] {
            assert_eq!(paths.distances(), dijkstra.distances());
            assert_eq!(paths.predecessors(), dijkstra.predecessors());
        }

        let bfs = graph.bfs_mssp(&["A"]).unwrap();
        assert_eq!(bfs.distances(), graph.bfs_sssp(&"A").unwrap().distances());
    }

    #[test]
    fn bfs_example() {
        let graph =
            Graph::from_edges(["A", "B", "C", "D"], [("A", "B"), ("B", "C"), ("C", "D")], false)
                .unwrap();

        let paths = graph.bfs_mssp(&["A", "B"]).unwrap();
        assert_eq!(paths.distance(&"D"), Some(2.0));
        assert_eq!(paths.predecessor(&"D"), Some(&"C"));
        assert_eq!(paths.predecessor(&"C"), Some(&"B"));
        assert_eq!(paths.distance(&"A"), Some(0.0));
        assert_eq!(paths.distances().len(), 4);
    }
}
