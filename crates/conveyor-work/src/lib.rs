//! In-memory ordering primitives for Conveyor work dispatch.
//!
//! This crate provides two independent strategies for holding pending work:
//! - [`PriorityQueue`]: pop the highest-priority element next, backed by a
//!   binary [`MaxHeap`].
//! - [`RingQueue`]: pop in arrival order, backed by a power-of-two
//!   circular buffer with bit-masked index wrapping.
//!
//! Both hold opaque payloads and are single-threaded; callers needing
//! concurrent access must wrap them in their own synchronization.
//!
//! # Example
//!
//! ```
//! use conveyor_work::{Element, PriorityQueue, RingQueue};
//!
//! let mut priority = PriorityQueue::new();
//! priority.push(Element::Prioritized { value: "urgent", priority: 9 });
//! priority.push(Element::Plain("whenever"));
//! assert_eq!(priority.pop().unwrap(), "urgent");
//!
//! let mut fifo = RingQueue::new();
//! fifo.push("first");
//! fifo.push("second");
//! assert_eq!(fifo.pop().unwrap(), "first");
//! ```

pub mod error;
pub mod heap;
pub mod priority;
pub mod ring;
pub mod store;

pub use error::{QueueError, Result};
pub use heap::{HeapNode, MaxHeap};
pub use priority::{Element, PriorityQueue};
pub use ring::RingQueue;
pub use store::WorkDataStore;
