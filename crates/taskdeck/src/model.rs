//! # Domain Model: Task Records
//!
//! This module defines the core data structures of taskdeck: [`Task`], its two
//! closed enumerations [`Priority`] and [`TaskStatus`], and the two payloads that
//! feed the record lifecycle, [`NewTask`] and [`TaskPatch`].
//!
//! ## Identity and Timestamps
//!
//! - `id` is assigned by the storage collaborator ([`crate::store::TaskStore::next_id`])
//!   and never changes afterwards.
//! - `created_at` is set once, from the injected clock, when the record is born.
//! - `updated_at` is refreshed by every successful patch.
//!
//! ## The Due Date Rule
//!
//! A due date may never fall before the calendar date of `created_at`. On update
//! the comparison is made against the *original* creation date, not against the
//! time of the update. See [`validate_due_date`].
//!
//! ## Enumeration Names
//!
//! Both enumerations are addressed by their upper-case names (`HIGH`,
//! `IN_PROGRESS`, ...). Parsing is case-insensitive but otherwise exact:
//! unknown names are rejected with [`TaskError::UnrecognizedValue`], never
//! coerced to a default.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TaskError};

pub type TaskId = i64;

/// Urgency of a task. Declaration order is urgency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Lower rank = more urgent.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "HIGH" => Ok(Priority::High),
            "MEDIUM" => Ok(Priority::Medium),
            "LOW" => Ok(Priority::Low),
            _ => Err(TaskError::UnrecognizedValue {
                kind: "priority",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Done];

    pub fn name(self) -> &'static str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }

    /// `Done` is the only terminal status.
    pub fn is_done(self) -> bool {
        self == TaskStatus::Done
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Ok(TaskStatus::Pending),
            "IN_PROGRESS" => Ok(TaskStatus::InProgress),
            "DONE" => Ok(TaskStatus::Done),
            _ => Err(TaskError::UnrecognizedValue {
                kind: "status",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Free-form, comma or space separated. Matched by substring only.
    #[serde(default)]
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        priority: Priority,
        status: TaskStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            priority,
            status,
            tags: None,
            created_at,
            updated_at: created_at,
            due_date: None,
        }
    }

    /// Calendar date of creation, the reference point for due-date validation.
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// Past due and still open. A `Done` task is never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_done() && self.due_date.is_some_and(|due| due < today)
    }

    pub fn description_len(&self) -> usize {
        self.description
            .as_deref()
            .map_or(0, |d| d.chars().count())
    }
}

/// Rejects a due date that falls before `created_on`.
pub fn validate_due_date(due_date: NaiveDate, created_on: NaiveDate) -> Result<()> {
    if due_date < created_on {
        return Err(TaskError::InvalidDueDate {
            due_date,
            created_on,
        });
    }
    Ok(())
}

/// Creation payload. `priority` and `status` fall back to configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub tags: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Materializes the record. Callers validate the due date first.
    pub fn into_task(
        self,
        id: TaskId,
        created_at: DateTime<Utc>,
        default_priority: Priority,
        default_status: TaskStatus,
    ) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority.unwrap_or(default_priority),
            status: self.status.unwrap_or(default_status),
            tags: self.tags,
            created_at,
            updated_at: created_at,
            due_date: self.due_date,
        }
    }
}

/// Partial update. `None` leaves the field untouched.
///
/// Fields cannot be cleared through a patch: an absent value always means
/// "unchanged", never "set to null".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub tags: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.tags.is_none()
            && self.due_date.is_none()
    }

    /// Merges the present fields into `task` and stamps `updated_at`.
    ///
    /// The due date is checked against the task's original creation date before
    /// anything is written, so a rejected patch leaves `task` untouched.
    pub fn apply(self, task: &mut Task, now: DateTime<Utc>) -> Result<()> {
        if let Some(due) = self.due_date {
            validate_due_date(due, task.created_on())?;
        }

        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = Some(description);
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(tags) = self.tags {
            task.tags = Some(tags);
        }
        if let Some(due) = self.due_date {
            task.due_date = Some(due);
        }
        task.updated_at = now;
        Ok(())
    }
}
