use std::io::{self, IsTerminal};
use std::path::Path;

use tracing::debug;

use crate::capture::{self, InterruptFlag, LineSource, PipedInput, Session, TerminalInput};
use crate::cli::{Cli, Mode};
use crate::error::AppError;
use crate::notes::NoteStore;
use crate::output::print_task_table;
use crate::tasks::TaskRegistry;
use crate::utils::{Timezone, run_helper};

/// Dispatch on the run mode; returns the process exit code
pub(crate) fn run(cli: &Cli) -> Result<i32, AppError> {
    match Mode::from(cli) {
        Mode::SearchFiles => run_search(&cli.files_script(), cli),
        Mode::SearchContent => run_search(&cli.content_script(), cli),
        Mode::Capture => run_capture(cli),
    }
}

fn run_search(script: &Path, cli: &Cli) -> Result<i32, AppError> {
    let status = run_helper(script, &cli.notes_root())?;
    Ok(status.code().unwrap_or(1))
}

fn run_capture(cli: &Cli) -> Result<i32, AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let registry = TaskRegistry::load(&cli.tasks_path())?;
    let store = NoteStore::new(cli.notes_root());
    debug!(notes_root = %store.root().display(), "Capturing notes");

    let interrupt = InterruptFlag::install().map_err(AppError::Terminal)?;
    let mut session = Session::new(registry, store, timezone);
    debug!(tasks = session.registry().len(), "Session ready");
    print_task_table(session.registry(), cli.use_color());

    let mut input: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(TerminalInput::new(interrupt))
    } else {
        Box::new(PipedInput::stdin(interrupt))
    };

    let exit = capture::run(&mut session, input.as_mut(), &mut io::stdout())?;
    debug!(?exit, "Capture loop finished");
    Ok(0)
}
