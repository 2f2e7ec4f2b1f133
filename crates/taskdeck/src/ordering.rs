//! # Task Orderings
//!
//! Three independent orderings, each a chain of keys where later keys only
//! break ties left by earlier ones:
//!
//! | Ordering | Keys |
//! |----------|------|
//! | [`TaskOrder::Recency`] | `created_at` desc |
//! | [`TaskOrder::Relevance`] | `due_date` asc (undated last), priority rank asc |
//! | [`TaskOrder::Recommendation`] | priority asc, `due_date` asc (undated last), description length desc |
//!
//! Search relevance and recommendation look alike but lead with different keys;
//! they are kept as separate orderings on purpose.
//!
//! All sorts go through `slice::sort_by`, which is stable: tasks that compare
//! equal keep their input order.

use chrono::NaiveDate;
use std::cmp::Ordering;

use crate::model::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOrder {
    /// Most recently created first.
    Recency,
    /// Soonest due first, undated last, then most urgent.
    Relevance,
    /// Most urgent first, then soonest due, then best described.
    Recommendation,
}

impl TaskOrder {
    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            TaskOrder::Recency => by_recency(a, b),
            TaskOrder::Relevance => by_relevance(a, b),
            TaskOrder::Recommendation => by_recommendation(a, b),
        }
    }

    pub fn sort(self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}

/// Ascending by date with `None` after every `Some`.
pub fn due_date_nulls_last(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn by_recency(a: &Task, b: &Task) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

pub fn by_relevance(a: &Task, b: &Task) -> Ordering {
    due_date_nulls_last(a.due_date, b.due_date)
        .then_with(|| a.priority.rank().cmp(&b.priority.rank()))
}

pub fn by_recommendation(a: &Task, b: &Task) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| due_date_nulls_last(a.due_date, b.due_date))
        .then_with(|| b.description_len().cmp(&a.description_len()))
}

pub fn sort_by_recency(mut tasks: Vec<Task>) -> Vec<Task> {
    TaskOrder::Recency.sort(&mut tasks);
    tasks
}

pub fn sort_by_relevance(mut tasks: Vec<Task>) -> Vec<Task> {
    TaskOrder::Relevance.sort(&mut tasks);
    tasks
}

pub fn sort_by_recommendation(mut tasks: Vec<Task>) -> Vec<Task> {
    TaskOrder::Recommendation.sort(&mut tasks);
    tasks
}
