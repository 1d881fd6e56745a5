//! Task entity and status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion status of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task has not been completed yet
    Pending,
    /// Task is finished
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked task.
///
/// `id`, `title`, `description` and `created_at` are fixed at creation.
/// Only `status` and `updated_at` change afterwards, via
/// [`TaskStore::update_status`](crate::store::TaskStore::update_status).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned identifier, format `task-<n>`
    pub id: String,

    /// Short label, 1-100 characters
    pub title: String,

    /// Longer free text, 1-500 characters
    pub description: String,

    /// Current status
    pub status: TaskStatus,

    /// Creation time (ISO 8601)
    pub created_at: DateTime<Utc>,

    /// Last modification time; refreshed on every status change
    pub updated_at: DateTime<Utc>,
}
