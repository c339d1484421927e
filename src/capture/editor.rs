//! Minimal single-line editor state
//!
//! Key handling is kept free of terminal I/O so it can be driven directly
//! from tests; `input::TerminalInput` does the drawing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum KeyOutcome {
    Continue,
    Submit(String),
    Interrupt(String),
    EndOfInput,
}

#[derive(Debug, Default)]
pub(crate) struct LineEditor {
    buffer: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub(crate) fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Cursor position in characters from the start of the buffer
    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display columns of the whole buffer
    pub(crate) fn width(&self) -> usize {
        columns(&self.buffer)
    }

    pub(crate) fn width_before_cursor(&self) -> usize {
        columns(&self.buffer[..self.cursor])
    }

    pub(crate) fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| !c.is_control()) {
            self.buffer.insert(self.cursor, c);
            self.cursor += 1;
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return KeyOutcome::Interrupt(self.text()),
            KeyCode::Char('d') if ctrl => {
                if self.buffer.is_empty() {
                    return KeyOutcome::EndOfInput;
                }
                self.delete_forward();
            }
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.buffer.len(),
            KeyCode::Char('u') if ctrl => {
                self.buffer.drain(..self.cursor);
                self.cursor = 0;
            }
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => {
                self.buffer.insert(self.cursor, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.buffer.remove(self.cursor);
                }
            }
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.buffer.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buffer.len(),
            KeyCode::Enter => {
                let line = self.text();
                self.buffer.clear();
                self.cursor = 0;
                return KeyOutcome::Submit(line);
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn delete_forward(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }
}

fn columns(chars: &[char]) -> usize {
    chars.iter().map(|c| c.width().unwrap_or(0)).sum()
}
