//! Note records and the per-day log files they are appended to

pub(crate) mod store;

use std::fmt;

use chrono::NaiveDateTime;

use crate::consts::TIMESTAMP_FORMAT;

pub(crate) use store::NoteStore;

/// One captured note, rendered as `[D.M.YYYY H.MM] [task] content`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NoteRecord {
    pub(crate) timestamp: NaiveDateTime,
    pub(crate) task_name: String,
    pub(crate) content: String,
}

impl NoteRecord {
    pub(crate) fn new(timestamp: NaiveDateTime, task_name: &str, content: &str) -> Self {
        Self {
            timestamp,
            task_name: task_name.to_string(),
            content: content.to_string(),
        }
    }
}

impl fmt::Display for NoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.task_name,
            self.content
        )
    }
}
