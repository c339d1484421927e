//! Interactive capture loop
//!
//! Idle (waiting on the line source) -> Processing (one line through the
//! session) -> back to Idle, until end of input or an interrupt.

pub(crate) mod editor;
pub(crate) mod input;
pub(crate) mod interrupt;
pub(crate) mod session;

use std::io::Write;

use tracing::{debug, warn};

use crate::consts::{PROMPT, USAGE_LINE};
use crate::error::{AppError, NoteError};

pub(crate) use input::{LineSource, PipedInput, ReadOutcome, TerminalInput};
pub(crate) use interrupt::InterruptFlag;
pub(crate) use session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CaptureExit {
    EndOfInput,
    Interrupted,
}

fn report(out: &mut impl Write, err: &NoteError) -> std::io::Result<()> {
    if !err.is_input_error() {
        warn!(error = %err, "Note was not saved");
    }
    writeln!(out, "{err}")
}

/// Run until the line source is exhausted or interrupted. Only a broken
/// line source or output stream ends the loop with an error.
pub(crate) fn run(
    session: &mut Session,
    input: &mut dyn LineSource,
    out: &mut impl Write,
) -> Result<CaptureExit, AppError> {
    loop {
        writeln!(out, "{USAGE_LINE}").map_err(AppError::Terminal)?;
        out.flush().map_err(AppError::Terminal)?;

        match input.read_line(PROMPT)? {
            ReadOutcome::Line(line) => match session.submit(&line) {
                Ok(Some(record)) => {
                    writeln!(out, "Note saved: {record}").map_err(AppError::Terminal)?;
                }
                Ok(None) => {}
                Err(e) => report(out, &e).map_err(AppError::Terminal)?,
            },
            ReadOutcome::EndOfInput => {
                writeln!(out).map_err(AppError::Terminal)?;
                return Ok(CaptureExit::EndOfInput);
            }
            ReadOutcome::Interrupted { pending } => {
                debug!(pending_len = pending.len(), "Interrupt received");
                writeln!(out).map_err(AppError::Terminal)?;
                match session.interrupt(&pending) {
                    Ok(Some(record)) => {
                        writeln!(out, "Note saved: {record}").map_err(AppError::Terminal)?;
                    }
                    Ok(None) => {}
                    Err(e) => report(out, &e).map_err(AppError::Terminal)?,
                }
                writeln!(out, "Exiting...").map_err(AppError::Terminal)?;
                return Ok(CaptureExit::Interrupted);
            }
        }
    }
}
