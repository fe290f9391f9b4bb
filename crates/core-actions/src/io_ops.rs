//! File load/save.
//!
//! Synchronous and scoped: the path is opened for the duration of one read or
//! one write and released immediately.
//!
//! Format: lines separated by a single LF. A trailing LF on load does not
//! produce an extra empty line; on save every line, including the last, is
//! followed by one LF. Other line endings (CR) are preserved as line content.

use core_state::EditorState;
use core_text::Buffer;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How the loader obtained the initial buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenStatus {
    Loaded { size_bytes: usize, line_count: usize },
    /// Path does not exist yet; the save will create it.
    Missing,
    /// Path exists but could not be read. Editing starts from an empty document.
    Unreadable(String),
}

#[derive(Debug)]
pub struct OpenOutcome {
    pub buffer: Buffer,
    pub file_name: PathBuf,
    pub status: OpenStatus,
}

impl OpenOutcome {
    pub fn into_state(self) -> EditorState {
        EditorState::with_file(self.buffer, self.file_name)
    }
}

#[derive(Debug, Error)]
pub enum IoError {
    #[error("cannot write {}: {source}", path.display())]
    PathUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no file name associated with the buffer")]
    NoFilename,
}

/// Open a file path into a new Buffer. Never fails: unreadable or missing
/// paths yield a single empty line, with the reason recorded in `status`.
pub fn open_file(path: &Path) -> OpenOutcome {
    let (buffer, status) = match std::fs::read(path) {
        Ok(content) => {
            let buffer = Buffer::from_bytes(&content);
            let status = OpenStatus::Loaded {
                size_bytes: content.len(),
                line_count: buffer.line_count(),
            };
            tracing::debug!(target: "io", file=%path.display(), size_bytes = content.len(), line_count = buffer.line_count(), "file_read_ok");
            (buffer, status)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(target: "io", file=%path.display(), "file_missing_new_document");
            (Buffer::new(), OpenStatus::Missing)
        }
        Err(e) => {
            tracing::warn!(target: "io", file=%path.display(), ?e, "file_open_error");
            (Buffer::new(), OpenStatus::Unreadable(e.to_string()))
        }
    };
    OpenOutcome {
        buffer,
        file_name: path.to_path_buf(),
        status,
    }
}

/// Serialize the active buffer to its associated file name (or the provided
/// target). Returns the number of bytes written and clears `dirty`.
pub fn write_file(state: &mut EditorState, target: Option<&Path>) -> Result<usize, IoError> {
    let path = match target {
        Some(p) => p.to_path_buf(),
        None => state.file_name.clone().ok_or(IoError::NoFilename)?,
    };
    let content = state.active_buffer().to_bytes();
    match std::fs::write(&path, &content) {
        Ok(()) => {
            tracing::debug!(target: "io", file=%path.display(), size_bytes = content.len(), "file_write_ok");
            state.dirty = false;
            Ok(content.len())
        }
        Err(source) => {
            tracing::error!(target: "io", file=%path.display(), ?source, "file_write_error");
            Err(IoError::PathUnwritable { path, source })
        }
    }
}
