use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::NoteRecord;
use crate::error::NoteError;

/// Append-only layout: `<root>/<M>.<YYYY>/<D>.<M>.<YYYY>.txt`
#[derive(Debug, Clone)]
pub(crate) struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn day_file(&self, date: NaiveDate) -> PathBuf {
        let month_dir = format!("{}.{}", date.month(), date.year());
        let file_name = format!("{}.{}.{}.txt", date.day(), date.month(), date.year());
        self.root.join(month_dir).join(file_name)
    }

    /// Append one record to the file for its day. The file is opened and
    /// closed per call.
    pub(crate) fn append(&self, record: &NoteRecord) -> Result<PathBuf, NoteError> {
        let path = self.day_file(record.timestamp.date());
        let persistence = |source| NoteError::Persistence {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(persistence)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(persistence)?;
        writeln!(file, "{record}").map_err(persistence)?;

        debug!(path = %path.display(), task = %record.task_name, "Appended note");
        Ok(path)
    }
}
