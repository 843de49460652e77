//! Priority queue built on [`MaxHeap`].
//!
//! Elements carry an explicit priority or none at all; the distinction is
//! made at the call site with [`Element`], never by inspecting the value.

use crate::error::{QueueError, Result};
use crate::heap::{HeapNode, MaxHeap};

/// An element pushed onto a [`PriorityQueue`].
///
/// `Plain` values queue at priority 0; `Prioritized` values carry their own
/// key. Higher priorities dequeue first.
#[derive(Debug, Clone)]
pub enum Element<T> {
    /// A bare value, queued at priority 0.
    Plain(T),
    /// A value with an explicit priority.
    Prioritized {
        /// The queued value.
        value: T,
        /// Ordering key; higher dequeues first.
        priority: i64,
    },
}

impl<T> Element<T> {
    fn into_parts(self) -> (i64, T) {
        match self {
            Element::Plain(value) => (0, value),
            Element::Prioritized { value, priority } => (priority, value),
        }
    }
}

/// A queue that always pops the highest-priority element.
///
/// Wraps a [`MaxHeap`] and tracks its own element count so emptiness can be
/// reported without reaching into heap internals. The count is incremented
/// on push and decremented on successful pop, keeping it in lock-step with
/// the heap's length.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: MaxHeap<T>,
    count: usize,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    /// Creates an empty priority queue.
    pub fn new() -> Self {
        Self {
            heap: MaxHeap::new(),
            count: 0,
        }
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Enqueues an element. Never fails.
    pub fn push(&mut self, element: Element<T>) {
        let (priority, value) = element.into_parts();
        self.heap.add(HeapNode::new(priority, value));
        self.count += 1;
    }

    /// Dequeues the highest-priority element.
    ///
    /// Returns a [`QueueError::Empty`] when the queue holds nothing. A
    /// heap-level error with the count reporting elements present means the
    /// two have desynchronized; it is wrapped and re-raised rather than
    /// swallowed.
    pub fn pop(&mut self) -> Result<T> {
        if self.count == 0 {
            return Err(QueueError::empty("priority queue", "pop"));
        }

        let value = self.heap.pop().map_err(|source| QueueError::Heap {
            operation: "pop",
            source: Box::new(source),
        })?;
        self.count -= 1;

        Ok(value)
    }

    /// Returns the highest-priority element without removing it.
    ///
    /// Returns a [`QueueError::Empty`] when the queue holds nothing.
    pub fn peek(&self) -> Result<&T> {
        if self.count == 0 {
            return Err(QueueError::empty("priority queue", "peek"));
        }

        self.heap.first_value().map_err(|source| QueueError::Heap {
            operation: "peek",
            source: Box::new(source),
        })
    }

    #[cfg(test)]
    pub(crate) fn heap_len(&self) -> usize {
        self.heap.len()
    }
}
