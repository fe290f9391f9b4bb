//! Terminal writer: an ordered batch of primitive terminal operations flushed
//! once per frame.
//!
//! Invariants:
//! * Commands preserve ordering; nothing reaches the sink before `flush_to`.
//! * Positions are absolute with a (0,0) origin; the caller ensures bounds.
//! * The writer owns no global state; it is a short-lived object per frame.

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveTo(u16, u16),
    /// Clear the row the terminal cursor is on. Always preceded by a `MoveTo`.
    ClearLine,
    /// Clear the whole screen.
    ClearAll,
    Print(String),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn clear_line(&mut self) {
        self.cmds.push(Command::ClearLine);
    }
    pub fn clear_all(&mut self) {
        self.cmds.push(Command::ClearAll);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
    pub fn print_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, Command::Print(_)))
            .count()
    }

    /// Emit every queued command into `out` and flush it.
    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::ClearLine => queue!(out, Clear(ClearType::CurrentLine))?,
                Command::ClearAll => queue!(out, Clear(ClearType::All))?,
                Command::Print(s) => queue!(out, Print(s))?,
            }
        }
        out.flush()?;
        Ok(())
    }
}
