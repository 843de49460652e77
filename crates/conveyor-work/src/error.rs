//! Error types for queue operations.

use thiserror::Error;

/// Errors that can occur during queue operations.
///
/// Every variant signals "nothing to do right now" or an internal
/// bookkeeping slip; none is fatal and none is retried automatically.
#[derive(Error, Debug)]
pub enum QueueError {
    /// Pop or peek attempted on a structure with no elements.
    #[error("{structure}: {operation} called on empty structure")]
    Empty {
        /// Which structure was accessed ("max heap", "priority queue", ...).
        structure: &'static str,
        /// Which operation was attempted ("pop", "peek").
        operation: &'static str,
    },

    /// Heap-level failure surfaced through the priority queue.
    ///
    /// Propagation is one level deep only; the source is always an
    /// [`QueueError::Empty`] from the inner heap.
    #[error("priority queue: error in {operation}: {source}")]
    Heap {
        /// Which priority-queue operation hit the error.
        operation: &'static str,
        /// The underlying heap error.
        #[source]
        source: Box<QueueError>,
    },
}

impl QueueError {
    /// Shorthand for an empty-structure error.
    pub(crate) fn empty(structure: &'static str, operation: &'static str) -> Self {
        QueueError::Empty {
            structure,
            operation,
        }
    }
}

/// Result type alias for queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;
