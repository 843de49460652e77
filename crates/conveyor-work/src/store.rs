//! The `WorkDataStore` capability.

use crate::error::Result;

/// A backing store feeding workers the data they should work on.
///
/// A queue, a database table, or anything else that can hold pending work
/// can sit behind this trait. The core queues in this crate are natural
/// candidates to implement it once a dispatch loop exists to consume them;
/// nothing in the crate wires them up yet.
pub trait WorkDataStore<T> {
    /// Stores a value for later retrieval.
    fn put_data(&mut self, data: T);

    /// Retrieves the next value.
    ///
    /// Fails when no data is available.
    fn retrieve_data(&mut self) -> Result<T>;
}
