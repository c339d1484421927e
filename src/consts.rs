/// Timestamp inside a note line: "3.3.2024 9.05"
pub(crate) const TIMESTAMP_FORMAT: &str = "%-d.%-m.%Y %-H.%M";

/// Task list read at startup, relative to the working directory
pub(crate) const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Notes root when neither the flag, `NOTES_DIR` nor the config file set one
pub(crate) const DEFAULT_NOTES_DIR: &str = "./notes";

pub(crate) const NOTES_DIR_ENV: &str = "NOTES_DIR";

pub(crate) const DEFAULT_FILES_SCRIPT: &str = "./search-files.sh";
pub(crate) const DEFAULT_CONTENT_SCRIPT: &str = "./search-content.sh";

pub(crate) const PROMPT: &str = "Enter note: ";
pub(crate) const USAGE_LINE: &str = "Usage: [PREFIX] [NOTE]";
