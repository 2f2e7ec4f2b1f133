//! # Configuration
//!
//! taskdeck configuration is managed by [`confique`], which handles layered
//! loading from a TOML file, environment variables, and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `TASKDECK_DEFAULT_PAGE_SIZE`, `TASKDECK_DEFAULT_PRIORITY`,
//!    `TASKDECK_DEFAULT_STATUS`.
//! 2. **Config file**: the TOML file passed to [`TaskdeckConfig::load`], if it exists.
//! 3. **Compiled defaults**: built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default_page_size` | `5` | Page size used when the caller gives none |
//! | `default_priority` | `MEDIUM` | Priority of tasks created without one |
//! | `default_status` | `PENDING` | Status of tasks created without one |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TaskError};
use crate::model::{Priority, TaskStatus};

/// Configuration for taskdeck, stored in `taskdeck.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskdeckConfig {
    /// Page size used when the caller does not pass one.
    #[config(default = 5, env = "TASKDECK_DEFAULT_PAGE_SIZE")]
    pub default_page_size: usize,

    /// Priority applied to new tasks that do not specify one.
    #[config(default = "MEDIUM", env = "TASKDECK_DEFAULT_PRIORITY")]
    pub default_priority: Priority,

    /// Status applied to new tasks that do not specify one.
    #[config(default = "PENDING", env = "TASKDECK_DEFAULT_STATUS")]
    pub default_status: TaskStatus,
}

impl Default for TaskdeckConfig {
    fn default() -> Self {
        Self {
            default_page_size: 5,
            default_priority: Priority::Medium,
            default_status: TaskStatus::Pending,
        }
    }
}

impl TaskdeckConfig {
    /// Load configuration, layering environment over `path` over defaults.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| TaskError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = TaskdeckConfig::default();
        assert_eq!(config.default_page_size, 5);
        assert_eq!(config.default_priority, Priority::Medium);
        assert_eq!(config.default_status, TaskStatus::Pending);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taskdeck.toml");
        let mut table = toml::value::Table::new();
        table.insert("default_page_size".into(), toml::Value::Integer(20));
        table.insert("default_priority".into(), toml::Value::String("HIGH".into()));
        fs::write(&path, toml::to_string(&table).unwrap()).unwrap();

        let config = TaskdeckConfig::load(Some(&path)).unwrap();
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.default_priority, Priority::High);
        // Not in the file: compiled default.
        assert_eq!(config.default_status, TaskStatus::Pending);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = TaskdeckConfig::load(Some(&path)).unwrap();
        assert_eq!(config.default_page_size, 5);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taskdeck.toml");
        fs::write(&path, "default_priority = \"URGENT\"\n").unwrap();

        match TaskdeckConfig::load(Some(&path)) {
            Err(TaskError::Config(_)) => {}
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_config_serializes_to_toml() {
        let text = toml::to_string(&TaskdeckConfig::default()).unwrap();
        assert!(text.contains("default_page_size = 5"));
        assert!(text.contains("default_priority = \"MEDIUM\""));
    }
}
