//! # Summary Statistics
//!
//! Aggregates a snapshot into counts and a single "next due" task.
//!
//! ## Definitions
//!
//! - **completed**: status is `DONE`
//! - **pending**: anything else, so `completed + pending == total`
//! - **overdue**: has a due date strictly before `today` and is not `DONE`
//! - **count_by_priority**: priority name to count, only for priorities present
//! - **next_due_task**: among tasks due on or after `today`, the earliest;
//!   the first one in snapshot order wins a tie. `DONE` tasks are eligible.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::model::Task;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub pending_tasks: u64,
    pub overdue_tasks: u64,
    pub count_by_priority: BTreeMap<String, u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due_task: Option<Task>,
}

pub fn run(snapshot: &[Task], today: NaiveDate) -> TaskSummary {
    let mut summary = TaskSummary {
        total_tasks: snapshot.len() as u64,
        ..Default::default()
    };

    for task in snapshot {
        if task.is_done() {
            summary.completed_tasks += 1;
        } else {
            summary.pending_tasks += 1;
        }
        if task.is_overdue(today) {
            summary.overdue_tasks += 1;
        }
        *summary
            .count_by_priority
            .entry(task.priority.name().to_string())
            .or_insert(0) += 1;
    }

    // min_by_key keeps the first of equal minimums.
    summary.next_due_task = snapshot
        .iter()
        .filter_map(|t| t.due_date.filter(|due| *due >= today).map(|due| (due, t)))
        .min_by_key(|(due, _)| *due)
        .map(|(_, t)| t.clone());

    debug!(
        total = summary.total_tasks,
        completed = summary.completed_tasks,
        overdue = summary.overdue_tasks,
        "computed summary"
    );
    summary
}
