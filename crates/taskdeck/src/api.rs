//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for embedders: a web handler, a CLI, or a scheduled job all go
//! through [`TaskApi`].
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Fetches** a fresh snapshot from the store for every query
//! - **Reads the clock** and passes "now"/"today" down as plain values
//! - **Applies configuration** (default page size, default priority/status)
//! - **Dispatches** to the matching command function
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Rendering**: results are data structures, not strings
//! - **Caching**: nothing survives between calls
//!
//! ## Generic Over Collaborators
//!
//! `TaskApi<S: TaskStore, C: Clock>`:
//! - Production: a database-backed store and [`SystemClock`](crate::clock::SystemClock)
//! - Testing: [`InMemoryStore`](crate::store::memory::InMemoryStore) and
//!   [`FixedClock`](crate::clock::FixedClock)
//!
//! ## Testing Strategy
//!
//! API tests verify that each method reaches the right command with the right
//! arguments. Command behavior is tested in the command modules.

use tracing::debug;

use crate::attributes::Tabular;
use crate::clock::Clock;
use crate::commands;
use crate::commands::export::RowSink;
use crate::commands::page::{Page, StorePages};
use crate::commands::report::PendingReport;
use crate::commands::search::SearchQuery;
use crate::commands::summary::TaskSummary;
use crate::config::TaskdeckConfig;
use crate::error::Result;
use crate::model::{NewTask, Task, TaskId, TaskPatch};
use crate::store::TaskStore;

/// The main API facade for taskdeck operations.
pub struct TaskApi<S: TaskStore, C: Clock> {
    store: S,
    clock: C,
    config: TaskdeckConfig,
}

impl<S: TaskStore, C: Clock> TaskApi<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self::with_config(store, clock, TaskdeckConfig::default())
    }

    pub fn with_config(store: S, clock: C, config: TaskdeckConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn config(&self) -> &TaskdeckConfig {
        &self.config
    }

    pub fn create_task(&mut self, new_task: NewTask) -> Result<Task> {
        commands::create::run(&mut self.store, new_task, self.clock.now(), &self.config)
    }

    pub fn get_task(&self, id: TaskId) -> Result<Task> {
        commands::get::run(&self.store, id)
    }

    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> Result<Task> {
        commands::update::run(&mut self.store, id, patch, self.clock.now())
    }

    pub fn delete_task(&mut self, id: TaskId) -> Result<()> {
        commands::delete::run(&mut self.store, id)
    }

    /// Tasks matching optional status/priority names, newest first.
    pub fn list_tasks(&self, status: Option<&str>, priority: Option<&str>) -> Result<Vec<Task>> {
        Ok(commands::list::run(self.store.list_tasks()?, status, priority))
    }

    pub fn search_tasks(&self, query: &SearchQuery) -> Result<Vec<Task>> {
        Ok(commands::search::run(self.store.list_tasks()?, query))
    }

    pub fn summary(&self) -> Result<TaskSummary> {
        let snapshot = self.store.list_tasks()?;
        Ok(commands::summary::run(&snapshot, self.clock.today()))
    }

    pub fn recommended_tasks(&self) -> Result<Vec<Task>> {
        Ok(commands::recommend::run(self.store.list_tasks()?))
    }

    /// Store-ordered page. `size` falls back to the configured default.
    pub fn page(&self, page: usize, size: Option<usize>) -> Result<Page<Task>> {
        let size = size.unwrap_or(self.config.default_page_size);
        debug!(page, size, "paging tasks");
        commands::page::run(&StorePages(&self.store), page, size)
    }

    /// Every task in store order, written through `sink`.
    pub fn export<K: RowSink + ?Sized>(&self, sink: &mut K) -> Result<usize> {
        let snapshot = self.store.list_tasks()?;
        commands::export::run(Task::FIELDS, &snapshot, sink)
    }

    pub fn pending_report(&self) -> Result<PendingReport> {
        Ok(commands::report::run(
            self.store.list_tasks()?,
            self.clock.today(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::export::CsvSink;
    use crate::error::TaskError;
    use crate::model::{Priority, TaskStatus};
    use crate::store::memory::fixtures::{date, epoch, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use chrono::{Duration, TimeZone, Utc};

    fn reference_api() -> TaskApi<InMemoryStore, FixedClock> {
        let today = Utc.with_ymd_and_hms(2024, 1, 8, 12, 0, 0).unwrap();
        TaskApi::new(
            StoreFixture::new().with_reference_tasks().store,
            FixedClock::new(today),
        )
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn create_uses_clock_and_config() {
        let config = TaskdeckConfig {
            default_priority: Priority::High,
            ..Default::default()
        };
        let mut api = TaskApi::with_config(InMemoryStore::new(), FixedClock::new(epoch()), config);

        let task = api.create_task(NewTask::new("Write docs")).unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.created_at, epoch());
        assert_eq!(api.get_task(1).unwrap(), task);
    }

    #[test]
    fn update_uses_clock_for_updated_at() {
        let mut api = reference_api();
        let later = api.clock().now() + Duration::hours(1);
        api.clock_mut().set(later);

        let task = api
            .update_task(1, TaskPatch::new().status(TaskStatus::Done))
            .unwrap();
        assert_eq!(task.updated_at, later);
        assert_eq!(task.created_at, epoch());
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut api = reference_api();
        api.delete_task(2).unwrap();
        match api.get_task(2) {
            Err(TaskError::NotFound(id)) => assert_eq!(id, 2),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn list_passes_filters() {
        let api = reference_api();
        assert_eq!(api.list_tasks(Some("pending"), None).unwrap().len(), 2);
        assert_eq!(titles(&api.list_tasks(None, Some("LOW")).unwrap()), vec!["T2"]);
        assert_eq!(api.list_tasks(None, None).unwrap().len(), 3);
    }

    #[test]
    fn search_passes_query() {
        let api = reference_api();
        let query = SearchQuery {
            before: Some(date(2024, 1, 9)),
            ..Default::default()
        };
        assert_eq!(titles(&api.search_tasks(&query).unwrap()), vec!["T3"]);
    }

    #[test]
    fn summary_uses_clock_today() {
        let api = reference_api();
        let summary = api.summary().unwrap();
        assert_eq!(summary.overdue_tasks, 1);
        assert_eq!(summary.next_due_task.unwrap().title, "T1");
    }

    #[test]
    fn recommended_order() {
        let api = reference_api();
        assert_eq!(
            titles(&api.recommended_tasks().unwrap()),
            vec!["T1", "T3", "T2"]
        );
    }

    #[test]
    fn page_defaults_to_configured_size() {
        let api = TaskApi::new(StoreFixture::new().with_tasks(7).store, FixedClock::new(epoch()));
        let page = api.page(0, None).unwrap();
        assert_eq!(page.page_size, 5);
        assert_eq!(page.content.len(), 5);
        assert_eq!(page.total_pages, 2);

        let page = api.page(1, Some(3)).unwrap();
        let ids: Vec<i64> = page.content.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
    }

    #[test]
    fn export_writes_all_tasks() {
        let api = reference_api();
        let mut sink = CsvSink::new(Vec::new());
        assert_eq!(api.export(&mut sink).unwrap(), 3);
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn pending_report_dated_today() {
        let api = reference_api();
        let report = api.pending_report().unwrap();
        assert_eq!(report.date, date(2024, 1, 8));
        assert_eq!(titles(&report.tasks), vec!["T1", "T3"]);
    }
}
