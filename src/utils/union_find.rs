/*!
# Union-Find

Disjoint-set forest over arbitrary hashable elements with path compression and union by rank.
Elements have to be registered with [`UnionFind::make_set`] before they can be queried.
*/

use std::{fmt::Debug, hash::Hash};

use fxhash::FxHashMap;

use crate::error::*;

/// Disjoint-set forest
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parent: FxHashMap<T, T>,
    rank: FxHashMap<T, u32>,
    num_sets: usize,
}

impl<T> Default for UnionFind<T>
where
    T: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnionFind<T>
where
    T: Clone + Eq + Hash + Debug,
{
    /// Creates an empty structure
    pub fn new() -> Self {
        Self {
            parent: FxHashMap::default(),
            rank: FxHashMap::default(),
            num_sets: 0,
        }
    }

    /// Creates a structure with a singleton set for every element
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> Self {
        let mut uf = Self::new();
        for x in elements {
            uf.make_set(x);
        }
        uf
    }

    /// Returns the number of tracked elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if no element is tracked
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets
    pub fn number_of_sets(&self) -> usize {
        self.num_sets
    }

    /// Returns *true* if `x` was registered via `make_set`
    pub fn contains(&self, x: &T) -> bool {
        self.parent.contains_key(x)
    }

    /// Adds `{x}` as a new set. Does nothing if `x` is already tracked.
    pub fn make_set(&mut self, x: T) {
        if self.parent.contains_key(&x) {
            return;
        }
        self.rank.insert(x.clone(), 1);
        self.parent.insert(x.clone(), x);
        self.num_sets += 1;
    }

    /// Returns the root of the set containing `x` and compresses the path to it
    pub fn find(&mut self, x: &T) -> Result<T> {
        let mut root = self
            .parent
            .get(x)
            .ok_or_else(|| GraphError::UnknownElement(format!("{x:?}")))?
            .clone();

        loop {
            let next = &self.parent[&root];
            if *next == root {
                break;
            }
            root = next.clone();
        }

        // point every element on the path directly at the root
        let mut node = x.clone();
        while node != root {
            let Some(parent) = self.parent.get_mut(&node) else {
                break;
            };
            node = std::mem::replace(parent, root.clone());
        }

        Ok(root)
    }

    /// Merges the sets of `x` and `y`.
    /// Returns *true* if they were in different sets before.
    pub fn union(&mut self, x: &T, y: &T) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        let rank_x = self.rank[&root_x];
        let rank_y = self.rank[&root_y];

        if rank_x > rank_y {
            self.parent.insert(root_y, root_x);
        } else if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else {
            self.parent.insert(root_y, root_x.clone());
            self.rank.insert(root_x, rank_x + 1);
        }

        self.num_sets -= 1;
        Ok(true)
    }

    /// Returns *true* if `x` and `y` are in the same set
    pub fn connected(&mut self, x: &T, y: &T) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }
}
