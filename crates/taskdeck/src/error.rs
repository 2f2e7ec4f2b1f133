use chrono::NaiveDate;
use thiserror::Error;

use crate::model::TaskId;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Task not found with id: {0}")]
    NotFound(TaskId),

    #[error("dueDate {due_date} must not be earlier than createdAt ({created_on})")]
    InvalidDueDate {
        due_date: NaiveDate,
        created_on: NaiveDate,
    },

    #[error("Unrecognized {kind} value: {value:?}")]
    UnrecognizedValue { kind: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TaskError>;
