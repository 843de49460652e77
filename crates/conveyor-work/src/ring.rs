//! FIFO queue over a circular buffer.
//!
//! The buffer capacity is always a power of two so index wrapping can use a
//! bit-mask (`index & (capacity - 1)`) instead of a modulo. The buffer grows
//! when full and shrinks when occupancy falls to a quarter.

use tracing::trace;

use crate::error::{QueueError, Result};

/// Minimum buffer capacity. Must be a power of two.
const MIN_CAPACITY: usize = 16;

/// A FIFO queue backed by a circular buffer.
///
/// `head` marks the oldest element, `tail` the next free slot; `tail` may
/// sit numerically below `head` when the live region wraps. Popped slots are
/// cleared so the queue holds no reference to values it has handed out.
#[derive(Debug)]
pub struct RingQueue<T> {
    buffer: Vec<Option<T>>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T> RingQueue<T> {
    /// Creates an empty ring queue at the minimum capacity.
    pub fn new() -> Self {
        debug_assert!(MIN_CAPACITY.is_power_of_two());
        Self {
            buffer: fresh_buffer(MIN_CAPACITY),
            head: 0,
            tail: 0,
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

    /// Current buffer capacity. Always a power of two.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Enqueues an element at the tail. Never fails; a full buffer grows
    /// before the element is stored.
    pub fn push(&mut self, element: T) {
        if self.count == self.buffer.len() {
            self.resize();
        }

        self.buffer[self.tail] = Some(element);
        self.tail = (self.tail + 1) & (self.buffer.len() - 1);
        self.count += 1;
    }

    /// Dequeues the element at the head.
    ///
    /// Returns a [`QueueError::Empty`] when the queue holds nothing. The
    /// vacated slot is cleared, and the buffer shrinks once occupancy drops
    /// to exactly a quarter (never below the minimum capacity).
    pub fn pop(&mut self) -> Result<T> {
        if self.count == 0 {
            return Err(QueueError::empty("ring queue", "pop"));
        }

        let result = self.buffer[self.head].take();
        self.head = (self.head + 1) & (self.buffer.len() - 1);
        self.count -= 1;

        if self.buffer.len() > MIN_CAPACITY && (self.count << 2) == self.buffer.len() {
            self.resize();
        }

        result.ok_or(QueueError::empty("ring queue", "pop"))
    }

    /// Returns the element at the head without removing it.
    ///
    /// Returns a [`QueueError::Empty`] when the queue holds nothing.
    pub fn peek(&self) -> Result<&T> {
        if self.count == 0 {
            return Err(QueueError::empty("ring queue", "peek"));
        }

        self.buffer[self.head]
            .as_ref()
            .ok_or(QueueError::empty("ring queue", "peek"))
    }

    /// Replaces the buffer with one sized to twice the live count, copying
    /// live elements in logical order to the front.
    ///
    /// Triggered at full occupancy this doubles capacity; triggered at a
    /// quarter occupancy it halves. Either way the result stays a power of
    /// two, which the bit-mask wrapping depends on.
    fn resize(&mut self) {
        let old_capacity = self.buffer.len();
        let mut new_buffer = fresh_buffer(self.count << 1);

        if self.tail > self.head {
            for (offset, slot) in self.buffer[self.head..self.tail].iter_mut().enumerate() {
                new_buffer[offset] = slot.take();
            }
        } else {
            let front_len = old_capacity - self.head;
            for (offset, slot) in self.buffer[self.head..].iter_mut().enumerate() {
                new_buffer[offset] = slot.take();
            }
            for (offset, slot) in self.buffer[..self.tail].iter_mut().enumerate() {
                new_buffer[front_len + offset] = slot.take();
            }
        }

        self.head = 0;
        self.tail = self.count;
        self.buffer = new_buffer;

        debug_assert!(self.buffer.len().is_power_of_two());
        trace!(
            old_capacity,
            new_capacity = self.buffer.len(),
            count = self.count,
            "resized ring buffer"
        );
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_buffer<T>(capacity: usize) -> Vec<Option<T>> {
    let mut buffer = Vec::with_capacity(capacity);
    buffer.resize_with(capacity, || None);
    buffer
}
