//! # Storage Layer
//!
//! taskdeck never persists anything itself. The [`TaskStore`] trait is the seam
//! to whatever storage collaborator the embedding application uses (a database,
//! a file, a remote service).
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with [`memory::InMemoryStore`]
//! - Keep the query layer **decoupled** from persistence details
//! - Leave transactions and consistency to the collaborator that owns them
//!
//! ## Contract
//!
//! - `next_id` hands out ids that are never reused.
//! - `list_tasks` returns a full snapshot in a stable order (ascending id for the
//!   in-memory store). The snapshot is owned by the caller.
//! - `get_task` and `delete_task` fail with [`TaskError::NotFound`] for unknown ids.
//! - `page_tasks` returns at most `limit` records starting at `offset` of the same
//!   order `list_tasks` uses.

use crate::error::{Result, TaskError};
use crate::model::{Task, TaskId};

pub mod memory;

/// Abstract interface for task storage.
pub trait TaskStore {
    /// Reserve a fresh id for a record about to be saved.
    fn next_id(&mut self) -> Result<TaskId>;

    /// Save a task (create or replace by id).
    fn save_task(&mut self, task: &Task) -> Result<()>;

    /// Get a task by id.
    fn get_task(&self, id: TaskId) -> Result<Task>;

    /// Snapshot of all tasks.
    fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Delete a task permanently.
    fn delete_task(&mut self, id: TaskId) -> Result<()>;

    fn exists(&self, id: TaskId) -> Result<bool> {
        match self.get_task(id) {
            Ok(_) => Ok(true),
            Err(TaskError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn count_tasks(&self) -> Result<usize> {
        Ok(self.list_tasks()?.len())
    }

    /// A bounded window of the snapshot order.
    fn page_tasks(&self, offset: usize, limit: usize) -> Result<Vec<Task>> {
        Ok(self
            .list_tasks()?
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }
}
