//! Task registry
//!
//! Maps short prefixes typed at the prompt to task names.

pub(crate) mod registry;

use serde::Deserialize;

/// A single `{prefix, task}` entry from the task file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Task {
    pub(crate) prefix: String,
    pub(crate) task: String,
}

pub(crate) use registry::TaskRegistry;
