//! Text edit action handling (insert/newline/backspace/delete).
//!
//! Responsible for mutating buffer contents through the `core_text` line
//! primitives and updating the view cursor. All offsets are bytes.
//!
//! Each rule sets the cursor directly into its legal range, so no separate
//! clamp pass runs afterwards. Line merges only happen when two lines exist,
//! which keeps the store non-empty without special casing.

use super::DispatchResult;
use crate::{EditKind, TAB, is_insertable};
use core_model::View;
use core_state::EditorState;
use core_text::{TextError, motion};

pub(crate) fn handle_edit(kind: EditKind, state: &mut EditorState, view: &mut View) -> DispatchResult {
    let before = view.cursor;
    let result = match kind {
        EditKind::InsertChar(b) => insert_char(state, view, b),
        EditKind::InsertTab => insert_char(state, view, TAB),
        EditKind::InsertNewline => insert_newline(state, view),
        EditKind::DeletePrev => delete_prev(state, view),
        EditKind::DeleteNext => delete_next(state, view),
    };
    match result {
        Ok(res) => {
            tracing::trace!(target: "actions.dispatch", op=?kind, line=before.line, byte=before.byte, to_line=view.cursor.line, to_byte=view.cursor.byte, changed=res.dirty, "edit");
            res
        }
        Err(e) => {
            // Guards above every primitive make this unreachable for a well-formed cursor.
            tracing::error!(target: "actions.dispatch", op=?kind, ?e, line=before.line, byte=before.byte, "edit_rejected");
            view.cursor = before;
            DispatchResult::clean()
        }
    }
}

fn insert_char(state: &mut EditorState, view: &mut View, b: u8) -> Result<DispatchResult, TextError> {
    if !is_insertable(b) {
        return Ok(DispatchResult::clean());
    }
    let mut pos = view.cursor;
    state.active_buffer_mut().insert_byte(&mut pos, b);
    view.cursor = pos;
    Ok(DispatchResult::dirty())
}

fn insert_newline(state: &mut EditorState, view: &mut View) -> Result<DispatchResult, TextError> {
    let pos = view.cursor;
    state.active_buffer_mut().split_line(pos.line, pos.byte)?;
    view.cursor.line = pos.line + 1;
    view.cursor.byte = 0;
    Ok(DispatchResult::dirty())
}

fn delete_prev(state: &mut EditorState, view: &mut View) -> Result<DispatchResult, TextError> {
    let pos = view.cursor;
    if motion::at_buffer_start(&pos) {
        return Ok(DispatchResult::clean());
    }
    let buf = state.active_buffer_mut();
    if pos.byte > 0 {
        buf.remove_byte(pos.line, pos.byte - 1);
        view.cursor.byte = pos.byte - 1;
    } else {
        let seam = buf.join_with_next(pos.line - 1)?;
        view.cursor.line = pos.line - 1;
        view.cursor.byte = seam;
    }
    Ok(DispatchResult::dirty())
}

fn delete_next(state: &mut EditorState, view: &mut View) -> Result<DispatchResult, TextError> {
    let pos = view.cursor;
    let buf = state.active_buffer_mut();
    if motion::at_buffer_end(buf, &pos) {
        return Ok(DispatchResult::clean());
    }
    if pos.byte < buf.line_byte_len(pos.line) {
        buf.remove_byte(pos.line, pos.byte);
    } else {
        buf.join_with_next(pos.line)?;
    }
    Ok(DispatchResult::dirty())
}
