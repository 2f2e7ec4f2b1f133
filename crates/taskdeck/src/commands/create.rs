use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::TaskdeckConfig;
use crate::error::Result;
use crate::model::{validate_due_date, NewTask, Task};
use crate::store::TaskStore;

/// Creates a task, applying configured defaults for priority and status.
///
/// The due date is validated against `now`'s calendar date before an id is
/// reserved, so a rejected task leaves the store untouched.
pub fn run<S: TaskStore>(
    store: &mut S,
    new_task: NewTask,
    now: DateTime<Utc>,
    config: &TaskdeckConfig,
) -> Result<Task> {
    if let Some(due) = new_task.due_date {
        validate_due_date(due, now.date_naive())?;
    }

    let id = store.next_id()?;
    let task = new_task.into_task(id, now, config.default_priority, config.default_status);
    store.save_task(&task)?;

    info!(id = task.id, priority = %task.priority, status = %task.status, "task created");
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::model::{Priority, TaskStatus};
    use crate::store::memory::fixtures::{date, epoch};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_with_defaults() {
        let mut store = InMemoryStore::new();
        let task = run(
            &mut store,
            NewTask::new("Buy milk"),
            epoch(),
            &TaskdeckConfig::default(),
        )
        .unwrap();

        assert_eq!(task.id, 1);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.created_at, epoch());
        assert_eq!(store.get_task(1).unwrap(), task);
    }

    #[test]
    fn uses_configured_defaults() {
        let mut store = InMemoryStore::new();
        let config = TaskdeckConfig {
            default_priority: Priority::Low,
            default_status: TaskStatus::InProgress,
            ..Default::default()
        };
        let task = run(&mut store, NewTask::new("x"), epoch(), &config).unwrap();
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.status, TaskStatus::InProgress);
    }

    #[test]
    fn due_date_today_is_accepted() {
        let mut store = InMemoryStore::new();
        let task = run(
            &mut store,
            NewTask::new("Today").with_due_date(date(2024, 1, 1)),
            epoch(),
            &TaskdeckConfig::default(),
        )
        .unwrap();
        assert_eq!(task.due_date, Some(date(2024, 1, 1)));
    }

    #[test]
    fn past_due_date_is_rejected_and_nothing_stored() {
        let mut store = InMemoryStore::new();
        let err = run(
            &mut store,
            NewTask::new("Late").with_due_date(date(2023, 12, 31)),
            epoch(),
            &TaskdeckConfig::default(),
        )
        .unwrap_err();

        match err {
            TaskError::InvalidDueDate {
                due_date,
                created_on,
            } => {
                assert_eq!(due_date, date(2023, 12, 31));
                assert_eq!(created_on, date(2024, 1, 1));
            }
            other => panic!("Expected InvalidDueDate, got {:?}", other),
        }
        assert_eq!(store.count_tasks().unwrap(), 0);
        // No id was burned by the rejected create.
        assert_eq!(store.next_id().unwrap(), 1);
    }
}
