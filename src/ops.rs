use std::ops::Range;

use itertools::Itertools;

use crate::{edge::*, error::*, vertex::*};

/// Provides getters pertaining to the vertex set of a graph
pub trait GraphVertexOrder {
    /// Identifier type of the vertices
    type Vertex: Vertex;

    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> usize;

    /// Return the number of vertices
    fn len(&self) -> usize {
        self.number_of_vertices()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the vertex stored at index `i`.
    /// ** Panics if `i >= n` **
    fn vertex_at(&self, i: VertexIndex) -> &Self::Vertex;

    /// Returns the index of a vertex or a *not-found* error if it is not part of the graph
    fn index_of(&self, v: &Self::Vertex) -> Result<VertexIndex>;

    /// Returns *true* if `v` is part of the graph
    fn contains_vertex(&self, v: &Self::Vertex) -> bool {
        self.index_of(v).is_ok()
    }

    /// Returns the range of all vertex indices.
    /// In contrast to [`GraphVertexOrder::vertices`], the range does not borrow self
    /// and hence may be used where mutable references of self are needed.
    fn vertex_indices(&self) -> Range<VertexIndex> {
        0..self.number_of_vertices()
    }

    /// Returns an iterator over V in storage order.
    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> + '_ {
        self.vertex_indices().map(move |i| self.vertex_at(i))
    }

    /// Returns *true* if edge insertions/removals are symmetric
    fn is_undirected(&self) -> bool;

    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool {
        !self.is_undirected()
    }
}

/// Traits pertaining getters for weights, neighborhoods & edges.
///
/// The index-based methods (`*_at`) are what algorithms use internally; the vertex-keyed
/// methods translate identifiers and fail with *not-found* on unknown vertices.
pub trait WeightedAdjacency: GraphVertexOrder + Sized {
    /// Returns the sentinel stored for missing edges
    fn absent_weight(&self) -> Weight;

    /// Returns the raw table entry for `(u, v)`, i.e. the absent sentinel if there is no edge
    /// and `0` on the diagonal.
    /// ** Panics if `u >= n || v >= n` **
    fn weight_at(&self, u: VertexIndex, v: VertexIndex) -> Weight;

    /// Returns *true* if there is an edge from `u` to `v`. Never true for `u == v`.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge_at(&self, u: VertexIndex, v: VertexIndex) -> bool {
        u != v && self.weight_at(u, v) != self.absent_weight()
    }

    /// Returns an iterator over the (open) out-neighborhood of `u` with the connecting weights.
    /// ** Panics if `u >= n` **
    fn neighbors_at(&self, u: VertexIndex) -> impl Iterator<Item = (VertexIndex, Weight)> + '_ {
        self.vertex_indices()
            .filter(move |&v| self.has_edge_at(u, v))
            .map(move |v| (v, self.weight_at(u, v)))
    }

    /// Returns the number of outgoing edges of `u`
    /// ** Panics if `u >= n` **
    fn degree_at(&self, u: VertexIndex) -> usize {
        self.neighbors_at(u).count()
    }

    /// Returns every directed arc `(u, v, w)`.
    /// For undirected graphs both orientations of every edge are returned.
    fn arcs(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex, Weight)> + '_ {
        self.vertex_indices()
            .flat_map(move |u| self.neighbors_at(u).map(move |(v, w)| (u, v, w)))
    }

    /// Returns the neighbors of `v` with the connecting weights, excluding `v` itself
    /// and any vertex whose weight equals the absent sentinel.
    fn neighbors(&self, v: &Self::Vertex) -> Result<Vec<(&Self::Vertex, Weight)>> {
        let u = self.index_of(v)?;
        Ok(self
            .neighbors_at(u)
            .map(|(x, w)| (self.vertex_at(x), w))
            .collect_vec())
    }

    /// Returns all edges `(u, v, w)`.
    /// Undirected graphs emit each edge once, as `(u, v)` with `u <= v`.
    fn edges(&self) -> Vec<WeightedEdge<Self::Vertex>> {
        self.arcs()
            .filter(|&(u, v, _)| !self.is_undirected() || self.vertex_at(u) <= self.vertex_at(v))
            .map(|(u, v, w)| WeightedEdge(self.vertex_at(u).clone(), self.vertex_at(v).clone(), w))
            .collect_vec()
    }

    /// Returns the number of edges (undirected edges are counted once)
    fn number_of_edges(&self) -> usize {
        let arcs = self.arcs().count();
        if self.is_undirected() { arcs / 2 } else { arcs }
    }

    /// Returns the weight of the edge from `u` to `v`, the absent sentinel if there is none
    fn edge_weight(&self, u: &Self::Vertex, v: &Self::Vertex) -> Result<Weight> {
        Ok(self.weight_at(self.index_of(u)?, self.index_of(v)?))
    }

    /// Returns *true* if the edge `(u, v)` exists
    fn has_edge(&self, u: &Self::Vertex, v: &Self::Vertex) -> Result<bool> {
        Ok(self.has_edge_at(self.index_of(u)?, self.index_of(v)?))
    }
}

/// Provides functions to insert/delete vertices and edges
pub trait GraphEditing: GraphVertexOrder {
    /// Adds a vertex without any edges.
    /// Returns *true* exactly if the vertex was not present previously.
    fn add_vertex(&mut self, v: Self::Vertex) -> bool;

    /// Removes a vertex and all of its edges.
    fn remove_vertex(&mut self, v: &Self::Vertex) -> Result<()>;

    /// Sets the weight of the edge `(u, v)` (and `(v, u)` for undirected graphs).
    /// The diagonal stays `0`: self-loops are not supported.
    fn add_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex, weight: Weight) -> Result<()>;

    /// Resets the edge `(u, v)` (and `(v, u)` for undirected graphs) to the absent sentinel.
    fn remove_edge(&mut self, u: &Self::Vertex, v: &Self::Vertex) -> Result<()>;

    /// Adds all edges in the collection; edges without weight get weight `1`
    fn add_edges<E>(&mut self, edges: impl IntoIterator<Item = E>) -> Result<()>
    where
        E: Into<WeightedEdge<Self::Vertex>>,
    {
        for WeightedEdge(u, v, w) in edges.into_iter().map(Into::into) {
            self.add_edge(&u, &v, w)?;
        }
        Ok(())
    }
}
