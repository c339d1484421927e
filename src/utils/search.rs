use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::consts::NOTES_DIR_ENV;
use crate::error::SearchError;

/// Hand the terminal over to an external search helper and wait for it.
/// The helper sees the resolved notes root in `NOTES_DIR`.
pub(crate) fn run_helper(script: &Path, notes_root: &Path) -> Result<ExitStatus, SearchError> {
    debug!(script = %script.display(), notes_root = %notes_root.display(), "Running search helper");
    Command::new(script)
        .env(NOTES_DIR_ENV, notes_root)
        .status()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SearchError::NotFound {
                    script: script.to_path_buf(),
                }
            } else {
                SearchError::Spawn(e)
            }
        })
}
