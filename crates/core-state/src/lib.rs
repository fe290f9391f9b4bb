//! Editor session state: the line store, the backing file path, and the
//! session phase.
//!
//! One `EditorState` lives for exactly one session (load → edit loop → save).
//! Cursor and scroll position are presentation state and live on the view in
//! `core-model`; this crate stays buffer-centric.
//!
//! Session phase machine:
//! * `Running` is initial.
//! * `Running → Quitting` on quit. `Quitting` is terminal: the loop exits and
//!   the buffer is handed to the saver. There is no transition back.

use core_text::Buffer;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Running,
    Quitting,
}

#[derive(Debug, Clone)]
pub struct EditorState {
    buffer: Buffer,
    pub file_name: Option<PathBuf>,
    /// Set on the first mutation; cleared after a successful save.
    pub dirty: bool,
    phase: SessionPhase,
}

impl EditorState {
    pub fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            file_name: None,
            dirty: false,
            phase: SessionPhase::Running,
        }
    }

    pub fn with_file(buffer: Buffer, file_name: impl Into<PathBuf>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            ..Self::new(buffer)
        }
    }

    pub fn active_buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn active_buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    /// Consume the state, yielding the buffer for the saver.
    pub fn into_buffer(self) -> Buffer {
        self.buffer
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, SessionPhase::Running)
    }

    /// Transition to `Quitting`. Idempotent; never touches the buffer.
    pub fn request_quit(&mut self) {
        if self.is_running() {
            tracing::debug!(target: "state", dirty = self.dirty, "session_quitting");
        }
        self.phase = SessionPhase::Quitting;
    }

    pub fn mark_dirty(&mut self) {
        if !self.dirty {
            self.dirty = true;
        }
    }
}
