/*!
# Graph Representation

A single dense representation is provided: [`Graph`] maps every vertex identifier to a
[`VertexIndex`](crate::vertex::VertexIndex) and stores all weights in a square table.
Dense tables keep weight lookups `O(1)`, which the all-pairs algorithms and the flow
bookkeeping rely on.
*/

use crate::{edge::*, error::*, ops::*, vertex::*};

mod graph;

pub use graph::*;
