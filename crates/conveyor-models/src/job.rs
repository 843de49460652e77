//! The `Job` capability.

use crate::work::WorkItem;

/// A value that can serialize itself into a byte payload suitable for
/// queueing.
///
/// Queues never inspect a payload; anything implementing `Job` can be fed
/// into a work pipeline as opaque bytes.
pub trait Job {
    /// Serialized payload to put the job into a work pipeline.
    fn payload(&self) -> Vec<u8>;
}

impl Job for WorkItem {
    fn payload(&self) -> Vec<u8> {
        // WorkItem contains no non-serializable fields, so this cannot fail.
        serde_json::to_vec(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::work::WorkPriority;

    #[test]
    fn test_work_item_payload_is_json() {
        let item = WorkItem::with_priority("proj-1", "Deploy", WorkPriority::High);
        let payload = item.payload();
        let parsed: WorkItem = serde_json::from_slice(&payload).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_payload_through_trait_object() {
        let item = WorkItem::new("proj-1", "Task");
        let job: &dyn Job = &item;
        assert!(!job.payload().is_empty());
    }
}
