//! Boundary model types for Conveyor.
//!
//! This crate provides the data types that cross the edges of the dispatch
//! pipeline: type-safe IDs, the `WorkItem` model, and the `Job` capability
//! that turns a value into a queueable byte payload.

pub mod ids;
pub mod job;
pub mod work;

// Re-export main types
pub use ids::{ProjectId, WorkId};
pub use job::Job;
pub use work::{WorkItem, WorkPriority};
