//! In-memory task store.
//!
//! Sole owner of task state; the API layer never touches the list directly.
//! A single `RwLock` guards both the task list and the id counter, so id
//! allocation and list mutation are atomic with respect to each other under
//! axum's parallel runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

/// A single tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub done: bool,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Task {0} not found")]
    NotFound(u64),
}

struct StoreInner {
    tasks: Vec<Task>,
    next_id: u64,
}

impl StoreInner {
    /// The fixed seed state: three tasks, counter at 4.
    fn seeded() -> Self {
        let seed = |id, title: &str, done| Task {
            id,
            title: title.to_string(),
            done,
        };
        Self {
            tasks: vec![
                seed(1, "Understand CI Stages", false),
                seed(2, "Fix the Failing Test", false),
                seed(3, "Review the Dockerfile", true),
            ],
            next_id: 4,
        }
    }
}

/// In-memory store, constructed once at startup and shared via `AppState`.
pub struct TaskStore {
    inner: RwLock<StoreInner>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::seeded()),
        }
    }

    /// All tasks in insertion order.
    pub async fn list(&self) -> Vec<Task> {
        self.inner.read().await.tasks.clone()
    }

    /// Append a new task under the next sequence id.
    ///
    /// Titles are trimmed for validation only; the stored title keeps its
    /// original spacing. A rejected title consumes no id.
    pub async fn create(&self, title: &str) -> Result<Task, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let mut inner = self.inner.write().await;
        let task = Task {
            id: inner.next_id,
            title: title.to_string(),
            done: false,
        };
        inner.next_id += 1;
        inner.tasks.push(task.clone());
        Ok(task)
    }

    /// Flip `done` on the matching task and return the updated task.
    pub async fn toggle(&self, id: u64) -> Result<Task, StoreError> {
        let mut inner = self.inner.write().await;
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.done = !task.done;
        Ok(task.clone())
    }

    /// Remove the matching task. Its id is never reused.
    pub async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        inner.tasks.remove(index);
        Ok(())
    }

    /// Restore the seed tasks and reset the id counter.
    ///
    /// Only for test harnesses; no route exposes this.
    pub async fn reset(&self) {
        *self.inner.write().await = StoreInner::seeded();
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
