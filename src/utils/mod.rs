/*!
# Utilities

Supporting containers the algorithms build on:
- [`IndexedPriorityQueue`]: a binary heap with a position index, supporting `decrease_key`,
  used by Dijkstra, Johnson and Prim,
- [`UnionFind`]: a disjoint-set forest with path compression and union by rank,
  used by Kruskal and Karger's min-cut.

Both are keyed by arbitrary hashable items rather than dense indices, so they can be used
outside of graph algorithms as well.
*/

pub mod priority_queue;
pub mod union_find;

pub use priority_queue::{HeapOrder, IndexedPriorityQueue, MaxFirst, MinFirst};
pub use union_find::UnionFind;
