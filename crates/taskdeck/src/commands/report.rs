//! Pending-task report.
//!
//! Lists every task that is not `DONE` and writes it to the log. Running this
//! on a schedule is the embedder's business.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::Task;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReport {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
}

impl PendingReport {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// One header event, one total event, then one event per task.
    pub fn log(&self) {
        info!(date = %self.date, "pending tasks report");
        info!(total = self.tasks.len(), "pending tasks");
        for task in &self.tasks {
            info!(
                id = task.id,
                title = %task.title,
                priority = %task.priority,
                due_date = ?task.due_date,
                status = %task.status,
                "pending task"
            );
        }
    }
}

/// Keeps snapshot order.
pub fn run(snapshot: Vec<Task>, today: NaiveDate) -> PendingReport {
    let tasks = snapshot.into_iter().filter(|t| !t.is_done()).collect();
    PendingReport { date: today, tasks }
}
