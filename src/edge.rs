use std::fmt::{Debug, Display};

use crate::vertex::{Vertex, Weight};

/// An edge is defined by two endpoints.
/// It is up to the user whether an Edge is directed or not.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V>(pub V, pub V);

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<V: Vertex> Edge<V> {
    /// Normalizes the edge such that the smaller endpoint comes first.
    /// Two normalized edges are equal iff they connect the same unordered pair.
    pub fn normalized(&self) -> Self {
        if self.0 <= self.1 {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// Returns true if the smaller endpoint comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge(value.0, value.1)
    }
}

/// A `(source, target, weight)` triple.
#[derive(Clone, PartialEq, PartialOrd)]
pub struct WeightedEdge<V>(pub V, pub V, pub Weight);

impl<V> WeightedEdge<V> {
    /// Drops the weight
    pub fn endpoints(self) -> Edge<V> {
        Edge(self.0, self.1)
    }

    /// Returns the weight of the edge
    pub fn weight(&self) -> Weight {
        self.2
    }
}

impl<V: Debug> Debug for WeightedEdge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?}: {})", self.0, self.1, self.2)
    }
}

/// Edges given without weight default to weight `1`
impl<V> From<(V, V)> for WeightedEdge<V> {
    fn from(value: (V, V)) -> Self {
        WeightedEdge(value.0, value.1, 1.0)
    }
}

impl<V> From<(V, V, Weight)> for WeightedEdge<V> {
    fn from(value: (V, V, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

impl<V> From<(V, V, Option<Weight>)> for WeightedEdge<V> {
    fn from(value: (V, V, Option<Weight>)) -> Self {
        WeightedEdge(value.0, value.1, value.2.unwrap_or(1.0))
    }
}
