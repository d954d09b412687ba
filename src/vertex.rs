/*!
# Vertex Representation

Vertices are arbitrary identifiers (strings, integers, enums, ...) as long as they can be hashed, ordered
and cloned. The ordering is used to canonicalize undirected edges and flow bookkeeping.

Internally, graphs store vertices densely and refer to them by [`VertexIndex`]. Indices are only stable
until the next `remove_vertex`.
*/

use std::{fmt::Debug, hash::Hash};

/// Anything that can identify a vertex
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Dense position of a vertex inside a graph
pub type VertexIndex = usize;

/// Edge weights, distances, capacities and flows
pub type Weight = f64;

/// Weight of a missing edge in graphs with the default sentinel
pub const ABSENT: Weight = Weight::INFINITY;

/// Vertex identifier of a scratch graph that carries one additional synthetic vertex.
///
/// Multi-source shortest paths and Johnson's algorithm copy the caller's graph into a
/// `Graph<Augmented<V>>`, add the [`Augmented::Portal`] and discard the copy afterwards.
/// This way the synthetic vertex can never collide with a real identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Augmented<V> {
    /// The synthetic vertex
    Portal,
    /// A vertex of the original graph
    Original(V),
}

impl<V> Augmented<V> {
    /// Returns the original vertex or `None` for the portal
    pub fn into_original(self) -> Option<V> {
        match self {
            Augmented::Portal => None,
            Augmented::Original(v) => Some(v),
        }
    }

    /// Returns *true* if this is the synthetic vertex
    pub fn is_portal(&self) -> bool {
        matches!(self, Augmented::Portal)
    }
}

impl<V> From<V> for Augmented<V> {
    fn from(value: V) -> Self {
        Augmented::Original(value)
    }
}
