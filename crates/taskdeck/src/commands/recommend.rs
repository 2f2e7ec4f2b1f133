use tracing::debug;

use crate::model::Task;
use crate::ordering::sort_by_recommendation;

/// Every task, most urgent first, then soonest due, then best described.
pub fn run(snapshot: Vec<Task>) -> Vec<Task> {
    debug!(count = snapshot.len(), "ranking tasks");
    sort_by_recommendation(snapshot)
}
