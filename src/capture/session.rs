//! Capture session state
//!
//! Holds everything one run of the capture loop needs. Both the normal
//! submit path and the interrupt path go through the same `Session`, which
//! is what makes the duplicate check on interrupt possible.

use chrono::NaiveDateTime;

use crate::error::NoteError;
use crate::notes::{NoteRecord, NoteStore};
use crate::tasks::TaskRegistry;
use crate::utils::Timezone;

pub(crate) struct Session {
    registry: TaskRegistry,
    store: NoteStore,
    timezone: Timezone,
    last_saved_input: String,
}

impl Session {
    pub(crate) fn new(registry: TaskRegistry, store: NoteStore, timezone: Timezone) -> Self {
        Self {
            registry,
            store,
            timezone,
            last_saved_input: String::new(),
        }
    }

    pub(crate) fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    #[cfg(test)]
    pub(crate) fn last_saved_input(&self) -> &str {
        &self.last_saved_input
    }

    pub(crate) fn submit(&mut self, raw: &str) -> Result<Option<NoteRecord>, NoteError> {
        let now = self.timezone.now();
        self.submit_at(raw, now)
    }

    /// Parse, resolve and persist one line. `Ok(None)` means the line was
    /// blank and nothing happened.
    pub(crate) fn submit_at(
        &mut self,
        raw: &str,
        now: NaiveDateTime,
    ) -> Result<Option<NoteRecord>, NoteError> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (prefix, content) = split_note(line).ok_or(NoteError::MissingNote)?;
        let task_name = self
            .registry
            .lookup(prefix)
            .ok_or_else(|| NoteError::UnknownPrefix {
                prefix: prefix.to_string(),
            })?;

        let record = NoteRecord::new(now, task_name, content);
        self.store.append(&record)?;
        self.last_saved_input = line.to_string();
        Ok(Some(record))
    }

    pub(crate) fn interrupt(&mut self, pending: &str) -> Result<Option<NoteRecord>, NoteError> {
        let now = self.timezone.now();
        self.interrupt_at(pending, now)
    }

    /// Best-effort save of a partially typed line. Skipped when the buffer
    /// is blank or is exactly the line saved last; input errors are
    /// swallowed, only persistence failures come back as `Err`.
    pub(crate) fn interrupt_at(
        &mut self,
        pending: &str,
        now: NaiveDateTime,
    ) -> Result<Option<NoteRecord>, NoteError> {
        let line = pending.trim();
        if line.is_empty() || line == self.last_saved_input {
            return Ok(None);
        }
        match self.submit_at(line, now) {
            Err(e) if e.is_input_error() => Ok(None),
            other => other,
        }
    }
}

/// Split at the first whitespace character into (prefix, rest).
/// The rest is kept verbatim.
fn split_note(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(char::is_whitespace)?;
    let ws_len = line[idx..].chars().next().map_or(1, char::len_utf8);
    Some((&line[..idx], &line[idx + ws_len..]))
}
