use crate::attributes::{apply, TaskFilter};
use crate::model::Task;
use crate::ordering::sort_by_recency;

/// Tasks matching the optional status and priority names, newest first.
pub fn run(snapshot: Vec<Task>, status: Option<&str>, priority: Option<&str>) -> Vec<Task> {
    let filter = TaskFilter::new().status(status).priority(priority);
    sort_by_recency(apply(&filter, snapshot))
}
