use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::Result;
use crate::model::{Task, TaskId, TaskPatch};
use crate::store::TaskStore;

/// Applies a partial update and saves the result.
///
/// Only fields present in `patch` change. A new due date is checked against the
/// task's original creation date, not against `now`.
pub fn run<S: TaskStore>(
    store: &mut S,
    id: TaskId,
    patch: TaskPatch,
    now: DateTime<Utc>,
) -> Result<Task> {
    let mut task = store.get_task(id)?;

    if patch.is_empty() {
        debug!(id, "empty patch, refreshing updated_at only");
    }
    patch.apply(&mut task, now)?;
    store.save_task(&task)?;

    info!(id, "task updated");
    Ok(task)
}
