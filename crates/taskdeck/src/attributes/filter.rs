//! Task filtering.
//!
//! A [`TaskFilter`] is a list of [`Criterion`] values combined with AND logic.
//! Each optional query parameter contributes at most one criterion; a parameter
//! that is `None` contributes nothing and so matches every task.
//!
//! Text criteria are compared case-insensitively. The empty string is a literal
//! value, not "absent": callers that treat blank input as missing must drop it
//! before building the filter.

use chrono::NaiveDate;

use crate::model::Task;

/// A single filter condition on a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Status name, compared case-insensitively.
    Status(String),
    /// Priority name, compared case-insensitively.
    Priority(String),
    /// Substring of the title or the description.
    Keyword(String),
    /// Substring of the tags string.
    Tag(String),
    /// Inclusive lower bound on the due date.
    After(NaiveDate),
    /// Inclusive upper bound on the due date.
    Before(NaiveDate),
}

impl Criterion {
    /// Returns `true` if the task satisfies this condition.
    ///
    /// Missing optional fields never satisfy a criterion that reads them.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Criterion::Status(name) => task.status.name().eq_ignore_ascii_case(name),
            Criterion::Priority(name) => task.priority.name().eq_ignore_ascii_case(name),
            Criterion::Keyword(keyword) => {
                let needle = keyword.to_lowercase();
                contains_ci(Some(&task.title), &needle)
                    || contains_ci(task.description.as_deref(), &needle)
            }
            Criterion::Tag(tag) => contains_ci(task.tags.as_deref(), &tag.to_lowercase()),
            Criterion::After(bound) => task.due_date.is_some_and(|due| due >= *bound),
            Criterion::Before(bound) => task.due_date.is_some_and(|due| due <= *bound),
        }
    }
}

fn contains_ci(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(needle_lower))
}

/// Conjunction of criteria. The empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    criteria: Vec<Criterion>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion unconditionally.
    pub fn with(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    fn with_opt<T>(self, value: Option<T>, make: impl FnOnce(T) -> Criterion) -> Self {
        match value {
            Some(v) => self.with(make(v)),
            None => self,
        }
    }

    pub fn status<S: Into<String>>(self, status: Option<S>) -> Self {
        self.with_opt(status, |s| Criterion::Status(s.into()))
    }

    pub fn priority<S: Into<String>>(self, priority: Option<S>) -> Self {
        self.with_opt(priority, |p| Criterion::Priority(p.into()))
    }

    pub fn keyword<S: Into<String>>(self, keyword: Option<S>) -> Self {
        self.with_opt(keyword, |k| Criterion::Keyword(k.into()))
    }

    pub fn tag<S: Into<String>>(self, tag: Option<S>) -> Self {
        self.with_opt(tag, |t| Criterion::Tag(t.into()))
    }

    pub fn after(self, after: Option<NaiveDate>) -> Self {
        self.with_opt(after, Criterion::After)
    }

    pub fn before(self, before: Option<NaiveDate>) -> Self {
        self.with_opt(before, Criterion::Before)
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns `true` if the task matches ALL criteria.
    pub fn matches(&self, task: &Task) -> bool {
        self.criteria.iter().all(|c| c.matches(task))
    }
}

/// Keeps the tasks matching `filter`, in input order.
pub fn apply(filter: &TaskFilter, tasks: Vec<Task>) -> Vec<Task> {
    if filter.is_empty() {
        return tasks;
    }
    tasks.into_iter().filter(|t| filter.matches(t)).collect()
}
