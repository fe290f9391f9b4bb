//! Dispatcher applying `Action` to mutable editor state.
//!
//! Sub-modules:
//! * `motion` - cursor movement semantics
//! * `edit`   - text mutation (insert/newline/backspace/delete)
//!
//! Every dispatch is atomic: the buffer and cursor move from one valid state
//! to the next with no observable intermediate state, so the caller may render
//! immediately afterwards.

use crate::Action;
use core_model::EditorModel;

mod edit;
mod motion;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Buffer contents changed.
    pub dirty: bool,
    /// Cursor position changed (a render is needed even when `dirty` is false).
    pub moved: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            moved: true,
            quit: false,
        }
    }
    pub fn moved() -> Self {
        Self {
            dirty: false,
            moved: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            moved: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: false,
            moved: false,
            quit: true,
        }
    }

    /// Whether the frame must be rebuilt after this dispatch.
    pub fn needs_render(&self) -> bool {
        self.dirty || self.moved
    }
}

/// Apply an action to the editor model.
pub fn dispatch(action: Action, model: &mut EditorModel) -> DispatchResult {
    let (state, view) = model.split_state_and_active_view();
    let result = match action {
        Action::Edit(kind) => edit::handle_edit(kind, state, view),
        Action::Motion(kind) => motion::handle_motion(kind, state, view),
        Action::Quit => {
            state.request_quit();
            DispatchResult::quit()
        }
    };
    if result.dirty {
        state.mark_dirty();
    }
    result
}
