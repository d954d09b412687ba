/*!
# Indexed Priority Queue

A binary heap that additionally tracks the slot of every queued item. The position index allows
[`IndexedPriorityQueue::decrease_key`] in `O(log n)` without searching the heap.

The ordering is a type parameter implementing [`HeapOrder`]: [`MinFirst`] (the default) pops the
smallest item, [`MaxFirst`] the largest. Floating point keys are wrapped in
[`ordered_float::OrderedFloat`] by the algorithms of this crate.

```
use wgraphs::utils::IndexedPriorityQueue;

let mut queue: IndexedPriorityQueue<(u32, char)> = IndexedPriorityQueue::new();
queue.insert((5, 'a'));
queue.insert((3, 'b'));
queue.decrease_key(&(5, 'a'), (1, 'a')).unwrap();

assert_eq!(queue.extract_min().unwrap(), (1, 'a'));
assert_eq!(queue.extract_min().unwrap(), (3, 'b'));
assert!(queue.extract_min().is_err());
```
*/

use std::{fmt::Debug, hash::Hash, marker::PhantomData};

use fxhash::FxHashMap;

use crate::error::*;

/// Ordering predicate of an [`IndexedPriorityQueue`]
pub trait HeapOrder<T> {
    /// Returns *true* if `a` must be extracted before `b`
    fn precedes(a: &T, b: &T) -> bool;
}

/// Smallest item first
#[derive(Debug, Clone, Copy, Default)]
pub struct MinFirst;

/// Largest item first
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxFirst;

impl<T: Ord> HeapOrder<T> for MinFirst {
    fn precedes(a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: Ord> HeapOrder<T> for MaxFirst {
    fn precedes(a: &T, b: &T) -> bool {
        a > b
    }
}

/// Binary heap with an item -> slot index.
///
/// Invariant: `position[heap[i]] == i` for every slot `i`.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<T, O = MinFirst> {
    heap: Vec<T>,
    position: FxHashMap<T, usize>,
    _order: PhantomData<O>,
}

impl<T, O> Default for IndexedPriorityQueue<T, O>
where
    T: Clone + Eq + Hash + Debug,
    O: HeapOrder<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> IndexedPriorityQueue<T, O>
where
    T: Clone + Eq + Hash + Debug,
    O: HeapOrder<T>,
{
    /// Creates an empty queue
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty queue with space for `capacity` items
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            position: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            _order: PhantomData,
        }
    }

    /// Returns the number of queued items
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns *true* if no item is queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns *true* if `item` is currently queued
    pub fn contains(&self, item: &T) -> bool {
        self.position.contains_key(item)
    }

    /// Inserts an item. Returns *false* (and leaves the queue unchanged) if an identical
    /// item is already queued.
    pub fn insert(&mut self, item: T) -> bool {
        if self.position.contains_key(&item) {
            return false;
        }

        let slot = self.heap.len();
        self.position.insert(item.clone(), slot);
        self.heap.push(item);
        self.sift_up(slot);
        true
    }

    /// Returns the first item without removing it
    pub fn peek(&self) -> Result<&T> {
        self.heap.first().ok_or(GraphError::EmptyQueue)
    }

    /// Removes and returns the first item
    pub fn extract_min(&mut self) -> Result<T> {
        self.remove_at(0).ok_or(GraphError::EmptyQueue)
    }

    /// Removes and returns the first item, or `None` if the queue is empty
    pub fn pop(&mut self) -> Option<T> {
        self.extract_min().ok()
    }

    /// Replaces a queued `item` by `new_value` and moves it towards the top.
    ///
    /// Does nothing if `new_value` does not strictly precede `item`. Fails if `item` is not queued.
    pub fn decrease_key(&mut self, item: &T, new_value: T) -> Result<()> {
        let slot = *self
            .position
            .get(item)
            .ok_or_else(|| GraphError::UnknownItem(format!("{item:?}")))?;

        if !O::precedes(&new_value, item) {
            return Ok(());
        }

        // the improved value is queued already: the old entry is redundant
        if self.position.contains_key(&new_value) {
            self.remove_at(slot);
            return Ok(());
        }

        self.position.remove(item);
        self.position.insert(new_value.clone(), slot);
        self.heap[slot] = new_value;
        self.sift_up(slot);
        Ok(())
    }

    /// Removes the item at `slot` by moving the last leaf into its place
    fn remove_at(&mut self, slot: usize) -> Option<T> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(slot, last);

        let item = self.heap.pop()?;
        self.position.remove(&item);

        if slot < self.heap.len() {
            self.sift_down(slot);
            self.sift_up(slot);
        }
        Some(item)
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !O::precedes(&self.heap[slot], &self.heap[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let mut best = slot;
            for child in [2 * slot + 1, 2 * slot + 2] {
                if child < self.heap.len() && O::precedes(&self.heap[child], &self.heap[best]) {
                    best = child;
                }
            }

            if best == slot {
                break;
            }
            self.swap(slot, best);
            slot = best;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.heap.swap(i, j);
        self.position.insert(self.heap[i].clone(), i);
        self.position.insert(self.heap[j].clone(), j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use ordered_float::OrderedFloat;
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_pcg::Pcg64Mcg;

    fn assert_positions<T, O>(queue: &IndexedPriorityQueue<T, O>)
    where
        T: Clone + Eq + Hash + Debug,
        O: HeapOrder<T>,
    {
        assert_eq!(queue.position.len(), queue.heap.len());
        for (i, item) in queue.heap.iter().enumerate() {
            assert_eq!(queue.position[item], i);
        }
    }

    #[test]
    fn extraction_is_sorted() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [1, 10, 100, 500] {
            let mut items = (0..n).collect_vec();
            items.shuffle(rng);

            let mut queue = IndexedPriorityQueue::<u32>::new();
            for &x in &items {
                assert!(queue.insert(x));
                assert_positions(&queue);
            }
            assert_eq!(queue.len(), n as usize);

            let extracted = (0..n)
                .map(|_| {
                    let x = queue.extract_min().unwrap();
                    assert_positions(&queue);
                    x
                })
                .collect_vec();
            assert_eq!(extracted, (0..n).collect_vec());
            assert!(queue.is_empty());
        }
    }

    #[test]
    fn max_first() {
        let mut queue = IndexedPriorityQueue::<_, MaxFirst>::new();
        for x in [3, 9, 1, 4] {
            queue.insert(x);
        }
        assert_eq!(*queue.peek().unwrap(), 9);
        assert_eq!(
            std::iter::from_fn(|| queue.pop()).collect_vec(),
            vec![9, 4, 3, 1]
        );
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let mut queue = IndexedPriorityQueue::<_>::new();
        assert!(queue.insert(4));
        assert!(!queue.insert(4));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn empty_queue_errors() {
        let mut queue = IndexedPriorityQueue::<i32>::new();
        assert_eq!(queue.peek(), Err(GraphError::EmptyQueue));
        assert_eq!(queue.extract_min(), Err(GraphError::EmptyQueue));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn decrease_key_moves_up_only() {
        let mut queue = IndexedPriorityQueue::<_>::new();
        for x in [10, 20, 30, 40] {
            queue.insert(x);
        }

        queue.decrease_key(&40, 5).unwrap();
        assert_positions(&queue);
        assert_eq!(*queue.peek().unwrap(), 5);
        assert!(!queue.contains(&40));

        // not an improvement: no-op
        queue.decrease_key(&20, 25).unwrap();
        assert!(queue.contains(&20));
        assert!(!queue.contains(&25));

        assert_eq!(
            queue.decrease_key(&99, 1),
            Err(GraphError::UnknownItem("99".into()))
        );

        assert_eq!(
            std::iter::from_fn(|| queue.pop()).collect_vec(),
            vec![5, 10, 20, 30]
        );
    }

    #[test]
    fn decrease_key_onto_queued_value() {
        let mut queue = IndexedPriorityQueue::<_>::new();
        for x in [1, 2, 3] {
            queue.insert(x);
        }
        queue.decrease_key(&3, 1).unwrap();
        assert_positions(&queue);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn random_decrease_keys_keep_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..20 {
            let mut queue = IndexedPriorityQueue::<(OrderedFloat<f64>, usize)>::new();
            let mut keys = (0..100)
                .map(|i| {
                    let key = OrderedFloat(rng.random_range(0.0..100.0));
                    queue.insert((key, i));
                    key
                })
                .collect_vec();

            for _ in 0..200 {
                let i = rng.random_range(0..keys.len());
                let new_key = OrderedFloat(rng.random_range(0.0..100.0));
                queue.decrease_key(&(keys[i], i), (new_key, i)).unwrap();
                keys[i] = keys[i].min(new_key);
                assert_positions(&queue);
            }

            let mut previous = OrderedFloat(f64::NEG_INFINITY);
            while let Ok((key, i)) = queue.extract_min() {
                assert!(previous <= key);
                assert_eq!(keys[i], key);
                previous = key;
            }
        }
    }
}
