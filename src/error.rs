//! Error types shared by every graph operation and algorithm.

/// Graph algorithm error types.
///
/// All failures are deterministic: retrying the same call on the same input fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A vertex (or flow-network endpoint) was never added or has been removed.
    #[error("Vertex not found: {0}")]
    NotFound(String),

    /// A negative-weight cycle is reachable; all distances of the computation are invalid.
    #[error("Graph contains a negative-weight cycle")]
    NegativeCycle,

    /// Dijkstra was asked to run on an edge with negative weight.
    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Pushing flow would exceed the capacity of the edge.
    #[error("Invalid flow addition: {flow} exceeds capacity {capacity} of edge {from} -> {to}")]
    ExceedsCapacity {
        from: String,
        to: String,
        flow: f64,
        capacity: f64,
    },

    /// Flow was pushed along an edge that does not exist in the network.
    #[error("Invalid flow addition: nonexistent edge {from} -> {to}")]
    NoSuchEdge { from: String, to: String },

    /// The algorithm requires an undirected graph.
    #[error("Graph must be undirected")]
    NotUndirected,

    /// The algorithm requires a directed graph.
    #[error("Graph must be directed")]
    NotDirected,

    /// `peek`/`extract_min` on an empty priority queue.
    #[error("Priority queue is empty")]
    EmptyQueue,

    /// `decrease_key` on an item that is not queued.
    #[error("Item not in priority queue: {0}")]
    UnknownItem(String),

    /// Union-find lookup of an element that was never created via `make_set`.
    #[error("Element not found in the union-find structure: {0}")]
    UnknownElement(String),

    /// Index of a strongly connected component out of range.
    #[error("Invalid component index {index} (only {count} components)")]
    InvalidComponent { index: usize, count: usize },
}

impl GraphError {
    pub(crate) fn not_found<V: std::fmt::Debug>(v: &V) -> Self {
        GraphError::NotFound(format!("{v:?}"))
    }
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
