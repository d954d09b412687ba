/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : every edge carries a `f64` weight (unweighted graphs simply use weight `1`)
- keyed by arbitrary vertex identifiers : anything `Clone + Eq + Hash + Ord + Debug`
- directed by default, with an `undirected` flag that makes edge edits symmetric

# Representation

A [`Graph`](crate::repr::Graph) stores its vertices densely: every vertex identifier is mapped
to a [`VertexIndex`] and the edge weights live in a square adjacency weight table.
`weight[u][v]` holds the weight of the edge from `u` to `v` or an *absent* sentinel
(`f64::INFINITY` by default) if there is no such edge; `weight[v][v]` is always `0`.

The sentinel can be repurposed: flow networks use `0` so that "no edge" reads as "zero capacity".

# Design

Algorithms are provided as traits implemented directly on graphs (`graph.dijkstra_sssp(&"A")`,
`graph.strongly_connected_components()`, ...). Where an algorithm has knobs, a small
configuration struct with setters is provided ([`algo::Dijkstra`], [`algo::KargerMinCut`]).
Internally all algorithms run over vertex indices and translate their results back into
vertex-keyed maps.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes vertex/edge definitions, the access traits and the graph representation,
- [`algo`] includes traversal, shortest paths, spanning trees, flow, SCC and 2-SAT,
- [`utils`] includes the indexed priority queue and the union-find structure the algorithms build on.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let graph = Graph::from_edges(
    ["A", "B", "C", "D"],
    [("A", "B", 1.0), ("B", "C", 2.0), ("C", "D", 3.0)],
    false,
)
.unwrap();

let paths = graph.dijkstra_sssp(&"A").unwrap();
assert_eq!(paths.distance(&"D"), Some(6.0));
assert_eq!(paths.predecessor(&"D"), Some(&"C"));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;
pub mod vertex;

pub use error::{GraphError, Result};

/// `wgraphs::prelude` includes definitions for vertices and edges, all basic graph operation traits
/// as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*};
}
