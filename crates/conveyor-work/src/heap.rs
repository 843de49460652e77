//! Binary max-heap over (key, value) pairs.
//!
//! The tree lives in a flat `Vec`, using the usual index arithmetic:
//! - parent: `(i - 1) / 2`
//! - left child: `2 * i + 1`
//! - right child: `2 * i + 2`
//!
//! After every [`MaxHeap::add`] and [`MaxHeap::pop`] the heap invariant
//! holds: for every non-root index `i`,
//! `heap[parent(i)].key >= heap[i].key`.

use crate::error::{QueueError, Result};

/// A (key, value) pair stored in a [`MaxHeap`].
///
/// Higher keys sort toward the root. The value is opaque to the heap.
#[derive(Debug, Clone)]
pub struct HeapNode<T> {
    key: i64,
    value: T,
}

impl<T> HeapNode<T> {
    /// Creates a node for use in a heap.
    pub fn new(key: i64, value: T) -> Self {
        Self { key, value }
    }

    /// Returns the node's ordering key.
    pub fn key(&self) -> i64 {
        self.key
    }

    /// Returns a reference to the node's value.
    pub fn value(&self) -> &T {
        &self.value
    }
}

/// An array-backed binary heap keeping the max-keyed node at the root.
///
/// Equal-key ordering is NOT stable: nodes with equal keys come out in an
/// order determined by the sift rules below, not by insertion order. The
/// sift-down child selection prefers the right child only when its key is
/// strictly greater than the left's; callers relying on observable ordering
/// among equal keys get exactly that asymmetry.
#[derive(Debug, Clone)]
pub struct MaxHeap<T> {
    heap: Vec<HeapNode<T>>,
}

impl<T> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MaxHeap<T> {
    /// Creates an empty max-heap.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Returns the number of nodes currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the heap holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts a node, then sifts it up until the invariant is restored.
    ///
    /// O(log n). Never fails.
    pub fn add(&mut self, node: HeapNode<T>) {
        self.heap.push(node);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes the max-keyed node and returns its value.
    ///
    /// The last node moves into the root slot and sifts down. O(log n).
    /// Returns a [`QueueError::Empty`] when the heap holds nothing.
    pub fn pop(&mut self) -> Result<T> {
        if self.heap.is_empty() {
            return Err(QueueError::empty("max heap", "pop"));
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let removed = self.heap.remove(last);

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Ok(removed.value)
    }

    /// Returns the value at the root without removing it.
    ///
    /// Returns a [`QueueError::Empty`] when the heap holds nothing.
    pub fn first_value(&self) -> Result<&T> {
        match self.heap.first() {
            Some(node) => Ok(&node.value),
            None => Err(QueueError::empty("max heap", "peek")),
        }
    }

    /// Moves the node at `index` toward the root while its key is strictly
    /// greater than its parent's.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent_index(index);

            if self.heap[parent].key >= self.heap[index].key {
                // parent already dominates; the node has settled
                return;
            }

            self.heap.swap(parent, index);
            index = parent;
        }
    }

    /// Moves the node at `index` away from the root while a child's key is
    /// strictly greater than its own.
    fn sift_down(&mut self, mut index: usize) {
        while left_index(index) < self.heap.len() {
            let child = self.max_child_index(index);

            if self.heap[child].key <= self.heap[index].key {
                // neither child dominates; the node has settled
                return;
            }

            self.heap.swap(child, index);
            index = child;
        }
    }

    /// Index of the larger child of `index`.
    ///
    /// The right child wins only on a strictly greater key; equal keys keep
    /// the left child. Callers must ensure the left child exists.
    fn max_child_index(&self, index: usize) -> usize {
        let left = left_index(index);
        let right = right_index(index);

        if right >= self.heap.len() {
            return left;
        }

        if self.heap[right].key > self.heap[left].key {
            right
        } else {
            left
        }
    }

    #[cfg(test)]
    pub(crate) fn node_key(&self, index: usize) -> i64 {
        self.heap[index].key
    }
}

fn parent_index(index: usize) -> usize {
    (index - 1) / 2
}

fn left_index(index: usize) -> usize {
    2 * index + 1
}

fn right_index(index: usize) -> usize {
    2 * index + 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    /// Checks the max-heap invariant over the whole backing array.
    fn assert_heap_invariant<T>(heap: &MaxHeap<T>) {
        for i in 1..heap.len() {
            assert!(
                heap.node_key(parent_index(i)) >= heap.node_key(i),
                "invariant broken at index {}: parent {} < child {}",
                i,
                heap.node_key(parent_index(i)),
                heap.node_key(i)
            );
        }
    }

    #[test]
    fn test_pop_empty() {
        let mut heap: MaxHeap<&str> = MaxHeap::new();
        let err = heap.pop().unwrap_err();
        assert!(matches!(
            err,
            QueueError::Empty {
                structure: "max heap",
                operation: "pop"
            }
        ));
    }

    #[test]
    fn test_peek_empty() {
        let heap: MaxHeap<&str> = MaxHeap::new();
        assert!(heap.first_value().is_err());
    }

    #[test]
    fn test_add_then_peek() {
        let mut heap = MaxHeap::new();
        heap.add(HeapNode::new(7, "only"));
        assert_eq!(*heap.first_value().unwrap(), "only");
        // peek does not remove
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_pops_in_descending_key_order() {
        let mut heap = MaxHeap::new();
        heap.add(HeapNode::new(3, "yee"));
        heap.add(HeapNode::new(1, "yeet"));
        heap.add(HeapNode::new(5, "haw"));
        heap.add(HeapNode::new(2, "asdf"));
        heap.add(HeapNode::new(8, "ok"));

        assert_eq!(heap.pop().unwrap(), "ok");
        assert_eq!(heap.pop().unwrap(), "haw");
        assert_eq!(heap.pop().unwrap(), "yee");
        assert_eq!(heap.pop().unwrap(), "asdf");
        assert_eq!(heap.pop().unwrap(), "yeet");
        assert!(heap.pop().is_err());
    }

    #[test]
    fn test_invariant_after_every_add() {
        let mut heap = MaxHeap::new();
        for (i, key) in [5, 3, 8, 1, 9, 9, 2, 7, 4, 6].into_iter().enumerate() {
            heap.add(HeapNode::new(key, i));
            assert_heap_invariant(&heap);
        }
    }

    #[test]
    fn test_invariant_after_every_pop() {
        let mut heap = MaxHeap::new();
        for key in [5, 3, 8, 1, 9, 2, 7] {
            heap.add(HeapNode::new(key, key));
        }
        while !heap.is_empty() {
            heap.pop().unwrap();
            assert_heap_invariant(&heap);
        }
    }

    #[test]
    fn test_round_trip_size() {
        let mut heap = MaxHeap::new();
        for key in 0..10 {
            heap.add(HeapNode::new(key, key));
        }
        for _ in 0..4 {
            heap.pop().unwrap();
        }
        assert_eq!(heap.len(), 6);
    }

    #[test]
    fn test_equal_keys_all_come_out() {
        let mut heap = MaxHeap::new();
        heap.add(HeapNode::new(1, "a"));
        heap.add(HeapNode::new(1, "b"));
        heap.add(HeapNode::new(1, "c"));

        let mut popped = vec![
            heap.pop().unwrap(),
            heap.pop().unwrap(),
            heap.pop().unwrap(),
        ];
        popped.sort();
        assert_eq!(popped, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_randomized_ordering_and_invariant() {
        let mut rng = rand::thread_rng();
        let mut heap = MaxHeap::new();

        let mut keys: Vec<i64> = (0..200).map(|_| rng.gen_range(-1000..1000)).collect();
        for &key in &keys {
            heap.add(HeapNode::new(key, key));
            assert_heap_invariant(&heap);
        }

        keys.sort_unstable_by(|a, b| b.cmp(a));
        for &expected in &keys {
            assert_eq!(heap.pop().unwrap(), expected);
            assert_heap_invariant(&heap);
        }
        assert!(heap.is_empty());
    }
}
