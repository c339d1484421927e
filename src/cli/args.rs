//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::consts::{
    DEFAULT_CONTENT_SCRIPT, DEFAULT_FILES_SCRIPT, DEFAULT_NOTES_DIR, DEFAULT_TASKS_FILE,
};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "noter")]
#[command(about = "Capture task-tagged notes into per-day log files", version)]
pub(crate) struct Cli {
    /// Search note file names with the external helper instead of taking notes
    #[arg(short = 'f', long, conflicts_with = "search")]
    pub(crate) files: bool,

    /// Search note contents with the external helper instead of taking notes
    #[arg(short = 's', long)]
    pub(crate) search: bool,

    /// Task list (JSON array of {"prefix", "task"}) [default: tasks.json]
    #[arg(long, value_name = "PATH")]
    pub(crate) tasks: Option<PathBuf>,

    /// Root directory for note files [default: ./notes]
    #[arg(long, env = "NOTES_DIR", value_name = "DIR")]
    pub(crate) notes_dir: Option<PathBuf>,

    /// Timezone for note timestamps (e.g., "Europe/Berlin", "UTC"); local time by default
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub(crate) debug: bool,

    #[arg(skip)]
    pub(crate) files_script: Option<PathBuf>,

    #[arg(skip)]
    pub(crate) content_script: Option<PathBuf>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args and `NOTES_DIR` take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.tasks.is_none() {
            self.tasks = config.tasks_file.clone();
        }
        if self.notes_dir.is_none() {
            self.notes_dir = config.notes_dir.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.files_script.is_none() {
            self.files_script = config.files_script.clone();
        }
        if self.content_script.is_none() {
            self.content_script = config.content_script.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn tasks_path(&self) -> PathBuf {
        self.tasks
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE))
    }

    pub(crate) fn notes_root(&self) -> PathBuf {
        self.notes_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_DIR))
    }

    pub(crate) fn files_script(&self) -> PathBuf {
        self.files_script
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILES_SCRIPT))
    }

    pub(crate) fn content_script(&self) -> PathBuf {
        self.content_script
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_SCRIPT))
    }
}
