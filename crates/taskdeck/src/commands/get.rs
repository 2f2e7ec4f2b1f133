use crate::error::Result;
use crate::model::{Task, TaskId};
use crate::store::TaskStore;

/// Fetches one task. Unknown ids are [`TaskError::NotFound`](crate::error::TaskError::NotFound).
pub fn run<S: TaskStore>(store: &S, id: TaskId) -> Result<Task> {
    store.get_task(id)
}
