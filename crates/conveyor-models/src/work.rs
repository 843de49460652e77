//! Work item types for Conveyor.
//!
//! Work items represent units of work waiting to be dispatched. The queues
//! themselves never look inside an item; these types exist so producers and
//! consumers agree on what a queued payload means.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ProjectId, WorkId};

/// Priority levels for work items.
///
/// Higher numeric value = higher priority.
/// Critical (4) > High (3) > Medium (2) > Low (1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkPriority {
    /// Low priority (1).
    Low,
    /// Medium priority (2).
    #[default]
    Medium,
    /// High priority (3).
    High,
    /// Critical priority (4).
    Critical,
}

impl WorkPriority {
    /// Returns the numeric value of this priority.
    /// Higher value = higher priority.
    pub fn as_value(&self) -> u8 {
        match self {
            WorkPriority::Low => 1,
            WorkPriority::Medium => 2,
            WorkPriority::High => 3,
            WorkPriority::Critical => 4,
        }
    }
}

impl PartialOrd for WorkPriority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WorkPriority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_value().cmp(&other.as_value())
    }
}

/// A unit of work waiting to be dispatched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Unique identifier for the work item.
    pub id: WorkId,

    /// ID of the project this work item belongs to.
    pub project_id: ProjectId,

    /// Description of the work to be done.
    pub content: String,

    /// Priority level of the work item.
    pub priority: WorkPriority,

    /// When the work item was created.
    pub created_at: DateTime<Utc>,
}

impl WorkItem {
    /// Creates a new work item with the given parameters.
    pub fn new(project_id: impl Into<ProjectId>, content: impl Into<String>) -> Self {
        Self {
            id: WorkId::new(),
            project_id: project_id.into(),
            content: content.into(),
            priority: WorkPriority::Medium,
            created_at: Utc::now(),
        }
    }

    /// Creates a new work item with the specified priority.
    pub fn with_priority(
        project_id: impl Into<ProjectId>,
        content: impl Into<String>,
        priority: WorkPriority,
    ) -> Self {
        let mut item = Self::new(project_id, content);
        item.priority = priority;
        item
    }

    /// Returns this item's priority as a heap key.
    pub fn priority_key(&self) -> i64 {
        i64::from(self.priority.as_value())
    }
}
