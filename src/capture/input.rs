//! Line sources for the capture loop
//!
//! A TTY gets the raw-mode editor so a half-typed line is visible to the
//! interrupt path. Anything else (pipes, files) is read line by line on a
//! helper thread.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crossterm::cursor::{MoveDown, MoveToColumn, MoveUp};
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

use super::editor::{KeyOutcome, LineEditor};
use super::interrupt::InterruptFlag;
use crate::error::AppError;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ReadOutcome {
    Line(String),
    EndOfInput,
    /// Interrupted while waiting; `pending` is whatever was typed so far
    Interrupted { pending: String },
}

pub(crate) trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, AppError>;
}

/// Raw mode for the duration of one read
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // Paste support is cosmetic; ignore terminals that refuse it
        let _ = execute!(io::stdout(), EnableBracketedPaste);
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableBracketedPaste);
        let _ = terminal::disable_raw_mode();
    }
}

/// Where a drawn `prompt + buffer` leaves things, in rows below the row
/// the prompt starts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    cursor_row: u16,
    cursor_col: u16,
    end_row: u16,
    /// The text exactly fills its last row; terminals park the cursor in
    /// the final column instead of wrapping, so a newline is forced
    wraps_at_end: bool,
}

impl Layout {
    /// All arguments are display columns; `width` is the terminal width
    fn compute(before_cursor: usize, total: usize, width: u16) -> Self {
        let width = usize::from(width.max(1));
        let to_u16 = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
        Self {
            cursor_row: to_u16(before_cursor / width),
            cursor_col: to_u16(before_cursor % width),
            end_row: to_u16(total / width),
            wraps_at_end: total > 0 && total % width == 0,
        }
    }
}

/// Tracks the last draw so a wrapped line can be cleared from its first row
#[derive(Debug, Default)]
struct Screen {
    cursor_row: u16,
    end_row: u16,
}

impl Screen {
    fn draw(&mut self, out: &mut impl Write, prompt: &str, editor: &LineEditor) -> io::Result<()> {
        let (width, _) = terminal::size()?;
        let prompt_cols = prompt.width();
        let layout = Layout::compute(
            prompt_cols + editor.width_before_cursor(),
            prompt_cols + editor.width(),
            width,
        );

        if self.cursor_row > 0 {
            queue!(out, MoveUp(self.cursor_row))?;
        }
        queue!(
            out,
            MoveToColumn(0),
            Clear(ClearType::FromCursorDown),
            Print(prompt),
            Print(editor.text())
        )?;
        if layout.wraps_at_end {
            queue!(out, Print("\r\n"))?;
        }
        let up = layout.end_row.saturating_sub(layout.cursor_row);
        if up > 0 {
            queue!(out, MoveUp(up))?;
        }
        queue!(out, MoveToColumn(layout.cursor_col))?;

        self.cursor_row = layout.cursor_row;
        self.end_row = layout.end_row;
        out.flush()
    }

    /// Move below the drawn text, then print `tail`
    fn finish(&mut self, out: &mut impl Write, tail: &str) -> io::Result<()> {
        let down = self.end_row.saturating_sub(self.cursor_row);
        if down > 0 {
            queue!(out, MoveDown(down))?;
        }
        queue!(out, Print(tail))?;
        out.flush()
    }
}

pub(crate) struct TerminalInput {
    interrupt: InterruptFlag,
}

impl TerminalInput {
    pub(crate) fn new(interrupt: InterruptFlag) -> Self {
        Self { interrupt }
    }

    fn read_raw(&mut self, prompt: &str) -> io::Result<ReadOutcome> {
        let _raw = RawModeGuard::enter()?;
        let mut out = io::stdout();
        let mut editor = LineEditor::default();
        let mut screen = Screen::default();
        screen.draw(&mut out, prompt, &editor)?;

        loop {
            if self.interrupt.is_raised() {
                return Ok(ReadOutcome::Interrupted {
                    pending: editor.text(),
                });
            }
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    match editor.handle_key(key) {
                        KeyOutcome::Continue => screen.draw(&mut out, prompt, &editor)?,
                        KeyOutcome::Submit(line) => {
                            screen.finish(&mut out, "\r\n")?;
                            return Ok(ReadOutcome::Line(line));
                        }
                        KeyOutcome::Interrupt(pending) => {
                            screen.finish(&mut out, "^C")?;
                            return Ok(ReadOutcome::Interrupted { pending });
                        }
                        KeyOutcome::EndOfInput => return Ok(ReadOutcome::EndOfInput),
                    }
                }
                Event::Paste(text) => {
                    editor.insert_str(&text);
                    screen.draw(&mut out, prompt, &editor)?;
                }
                Event::Resize(..) => screen.draw(&mut out, prompt, &editor)?,
                _ => {}
            }
        }
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, AppError> {
        self.read_raw(prompt).map_err(AppError::Terminal)
    }
}

/// Non-interactive stdin. Only whole lines exist here, so an interrupt
/// never carries a pending buffer.
pub(crate) struct PipedInput {
    lines: Receiver<io::Result<String>>,
    interrupt: InterruptFlag,
}

impl PipedInput {
    pub(crate) fn new(mut reader: impl BufRead + Send + 'static, interrupt: InterruptFlag) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = Vec::new();
            loop {
                let line = match read_lossy_line(&mut reader, &mut buf) {
                    Ok(Some(line)) => Ok(line),
                    Ok(None) => break,
                    Err(e) => Err(e),
                };
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
        });
        Self {
            lines: rx,
            interrupt,
        }
    }

    pub(crate) fn stdin(interrupt: InterruptFlag) -> Self {
        Self::new(io::BufReader::new(io::stdin()), interrupt)
    }
}

/// Next line without its `\n` or `\r\n`, or `None` at end of input.
/// Bytes that are not UTF-8 are replaced rather than ending the stream.
fn read_lossy_line(reader: &mut impl BufRead, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(match String::from_utf8_lossy(buf) {
        Cow::Borrowed(line) => line.to_string(),
        Cow::Owned(line) => {
            warn!("Input line is not valid UTF-8; invalid bytes were replaced");
            line
        }
    }))
}

impl LineSource for PipedInput {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, AppError> {
        let mut out = io::stdout();
        write!(out, "{prompt}").map_err(AppError::Terminal)?;
        out.flush().map_err(AppError::Terminal)?;

        loop {
            if self.interrupt.is_raised() {
                return Ok(ReadOutcome::Interrupted {
                    pending: String::new(),
                });
            }
            match self.lines.recv_timeout(POLL_INTERVAL) {
                Ok(Ok(line)) => return Ok(ReadOutcome::Line(line)),
                Ok(Err(e)) => return Err(AppError::Terminal(e)),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Ok(ReadOutcome::EndOfInput),
            }
        }
    }
}
