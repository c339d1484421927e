//! Run mode selection
//!
//! The two search flags hand off to external helpers; without them the
//! capture loop runs.

use super::args::Cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Capture,
    SearchFiles,
    SearchContent,
}

impl From<&Cli> for Mode {
    fn from(cli: &Cli) -> Self {
        if cli.files {
            Mode::SearchFiles
        } else if cli.search {
            Mode::SearchContent
        } else {
            Mode::Capture
        }
    }
}
