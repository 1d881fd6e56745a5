//! In-memory task store (non-persistent).

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::task::{Task, TaskStatus};

/// Sole owner of the task collection and the id counter.
///
/// Cheap to clone; all clones share the same collection. Every operation
/// acquires the lock exactly once, so each call is atomic with respect to
/// the others. Ids are assigned from a counter that only ever increments,
/// so an id is never reused even after its task is deleted.
#[derive(Clone)]
pub struct TaskStore {
    inner: Arc<RwLock<StoreInner>>,
}

struct StoreInner {
    /// Tasks in insertion order
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                tasks: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Snapshot of all tasks in insertion order.
    ///
    /// Returns clones; mutating the result does not touch the store.
    pub async fn list_all(&self) -> Vec<Task> {
        self.inner.read().await.tasks.clone()
    }

    /// Create a task with a freshly assigned id and `pending` status.
    ///
    /// Inputs are assumed to be validated by the caller.
    pub async fn create(&self, title: String, description: String) -> Task {
        let mut inner = self.inner.write().await;
        let id = format!("task-{}", inner.next_id);
        inner.next_id += 1;

        let now = Utc::now();
        let task = Task {
            id,
            title,
            description,
            status: TaskStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        inner.tasks.push(task.clone());
        task
    }

    /// Look up a task by id.
    pub async fn get_by_id(&self, id: &str) -> Option<Task> {
        self.inner
            .read()
            .await
            .tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
    }

    /// Set a task's status and refresh `updated_at`.
    ///
    /// Setting the current status again is a valid update and still
    /// refreshes the timestamp. Returns the updated task, or `None` if
    /// no task has this id.
    pub async fn update_status(&self, id: &str, status: TaskStatus) -> Option<Task> {
        let mut inner = self.inner.write().await;
        let task = inner.tasks.iter_mut().find(|task| task.id == id)?;
        task.status = status;
        task.updated_at = Utc::now();
        Some(task.clone())
    }

    /// Remove a task permanently. Returns whether a task was removed.
    pub async fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.write().await;
        match inner.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                inner.tasks.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
