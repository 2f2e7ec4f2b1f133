use std::collections::BTreeMap;

use tracing::debug;

use super::TaskStore;
use crate::error::{Result, TaskError};
use crate::model::{Task, TaskId};

/// Non-persistent store keyed by id. Listing order is ascending id.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    tasks: BTreeMap<TaskId, Task>,
    next_id: TaskId,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Seeds the store with fully formed tasks, keeping their ids.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut store = Self::new();
        for task in tasks {
            store.next_id = store.next_id.max(task.id + 1);
            store.tasks.insert(task.id, task);
        }
        store
    }
}

impl TaskStore for InMemoryStore {
    fn next_id(&mut self) -> Result<TaskId> {
        let id = self.next_id;
        self.next_id += 1;
        Ok(id)
    }

    fn save_task(&mut self, task: &Task) -> Result<()> {
        debug!(id = task.id, "saving task");
        self.next_id = self.next_id.max(task.id + 1);
        self.tasks.insert(task.id, task.clone());
        Ok(())
    }

    fn get_task(&self, id: TaskId) -> Result<Task> {
        self.tasks.get(&id).cloned().ok_or(TaskError::NotFound(id))
    }

    fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.values().cloned().collect())
    }

    fn delete_task(&mut self, id: TaskId) -> Result<()> {
        self.tasks
            .remove(&id)
            .map(|_| ())
            .ok_or(TaskError::NotFound(id))
    }

    fn exists(&self, id: TaskId) -> Result<bool> {
        Ok(self.tasks.contains_key(&id))
    }

    fn count_tasks(&self) -> Result<usize> {
        Ok(self.tasks.len())
    }

    fn page_tasks(&self, offset: usize, limit: usize) -> Result<Vec<Task>> {
        Ok(self
            .tasks
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Priority, TaskStatus};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    /// 2024-01-01T09:00:00Z, the creation instant of every fixture task.
    pub fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    }

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_tasks(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = self.store.next_id().unwrap();
                let mut task = Task::new(
                    id,
                    format!("Test Task {}", i + 1),
                    Priority::Medium,
                    TaskStatus::Pending,
                    epoch(),
                );
                task.description = Some(format!("Description for task {}", i + 1));
                self.store.save_task(&task).unwrap();
            }
            self
        }

        pub fn with_task(
            mut self,
            title: &str,
            priority: Priority,
            status: TaskStatus,
            due: Option<NaiveDate>,
        ) -> Self {
            let id = self.store.next_id().unwrap();
            let mut task = Task::new(id, title, priority, status, epoch());
            task.due_date = due;
            self.store.save_task(&task).unwrap();
            self
        }

        /// T1(HIGH, 2024-01-10, PENDING), T2(LOW, none, DONE), T3(MEDIUM, 2024-01-05, PENDING)
        pub fn with_reference_tasks(self) -> Self {
            self.with_task(
                "T1",
                Priority::High,
                TaskStatus::Pending,
                Some(date(2024, 1, 10)),
            )
            .with_task("T2", Priority::Low, TaskStatus::Done, None)
            .with_task(
                "T3",
                Priority::Medium,
                TaskStatus::Pending,
                Some(date(2024, 1, 5)),
            )
        }
    }
}
