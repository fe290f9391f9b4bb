#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{Action, DispatchResult, dispatch, translate_key};
use core_events::{KeyCode, KeyEvent};
use core_model::{EditorModel, View};
use core_state::EditorState;
use core_text::{Buffer, Position};

/// Model over `lines` with the cursor at (line, byte).
pub fn model_at(lines: &[&str], line: usize, byte: usize) -> EditorModel {
    let state = EditorState::new(Buffer::from_lines(lines.iter().copied()));
    EditorModel::with_view(View::new(Position::new(line, byte), 0), state)
}

pub fn lines(model: &EditorModel) -> Vec<String> {
    model
        .state()
        .active_buffer()
        .lines()
        .map(|l| String::from_utf8_lossy(l).into_owned())
        .collect()
}

pub fn cursor(model: &EditorModel) -> (usize, usize) {
    let c = model.active_view().cursor;
    (c.line, c.byte)
}

/// Translate and dispatch one key; unmapped keys are ignored like the session does.
pub fn press(model: &mut EditorModel, code: KeyCode) -> Option<DispatchResult> {
    let action: Action = translate_key(&KeyEvent::plain(code))?;
    Some(dispatch(action, model))
}

pub fn type_str(model: &mut EditorModel, text: &str) {
    for c in text.chars() {
        press(model, KeyCode::Char(c));
    }
}

/// Invariants that must hold after every dispatch.
pub fn assert_well_formed(model: &EditorModel) {
    let buf = model.state().active_buffer();
    let c = model.active_view().cursor;
    assert!(buf.line_count() >= 1, "store never empty");
    assert!(c.line < buf.line_count(), "cursor line {} out of range", c.line);
    assert!(
        c.byte <= buf.line_byte_len(c.line),
        "cursor byte {} past line end {}",
        c.byte,
        buf.line_byte_len(c.line)
    );
    assert!(buf.lines().all(|l| !l.contains(&b'\n')), "no stored LF");
}
