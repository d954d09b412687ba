/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representation in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, shortest paths, spanning trees, flow, SCC, 2-SAT and minimum cuts.
Most algorithms are provided as traits implemented for every [`WeightedAdjacency`](crate::ops::WeightedAdjacency),
so they run on [`Graph`](crate::repr::Graph), [`NetworkFlow`] and [`SccGraph`] alike.
*/

mod bipartite;
mod bridges;
mod connectivity;
mod min_cut;
mod network_flow;
mod shortest_path;
mod spanning_tree;
mod traversal;
mod two_sat;

use crate::{prelude::*, utils::*};
use fxhash::FxHashMap;
use itertools::Itertools;

pub use bipartite::*;
pub use bridges::*;
pub use connectivity::*;
pub use min_cut::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
pub use two_sat::*;
