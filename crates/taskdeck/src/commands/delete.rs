use tracing::info;

use crate::error::{Result, TaskError};
use crate::model::TaskId;
use crate::store::TaskStore;

pub fn run<S: TaskStore>(store: &mut S, id: TaskId) -> Result<()> {
    if !store.exists(id)? {
        return Err(TaskError::NotFound(id));
    }
    store.delete_task(id)?;
    info!(id, "task deleted");
    Ok(())
}
