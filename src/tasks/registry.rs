//! Task registry loading and lookup
//!
//! Loaded once at startup from a JSON array, read-only afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::Task;
use crate::error::AppError;

/// Ordered list of tasks; lookup is first-match in file order
#[derive(Debug, Clone, Default)]
pub(crate) struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    pub(crate) fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::TasksUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(|source| AppError::TasksMalformed {
                path: path.to_path_buf(),
                source,
            })?;

        let mut seen = HashSet::new();
        for task in &tasks {
            if !seen.insert(task.prefix.as_str()) {
                warn!(
                    prefix = %task.prefix,
                    task = %task.task,
                    "Duplicate prefix in task file, only the first entry is used"
                );
            }
        }
        debug!(path = %path.display(), count = tasks.len(), "Loaded task registry");

        Ok(Self::new(tasks))
    }

    /// Resolve a prefix to its task name
    pub(crate) fn lookup(&self, prefix: &str) -> Option<&str> {
        self.tasks
            .iter()
            .find(|t| t.prefix == prefix)
            .map(|t| t.task.as_str())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
