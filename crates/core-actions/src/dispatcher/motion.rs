//! Motion sub-dispatch (cursor movement).
//!
//! Pure, synchronous cursor movement. Delegates to `core_text::motion`, which
//! owns the wrap and clamp rules; this layer only reports whether the cursor
//! actually moved so the session can skip redundant frames.

use super::DispatchResult;
use crate::MotionKind;
use core_model::View;
use core_state::EditorState;
use core_text::motion;

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState, view: &mut View) -> DispatchResult {
    let before = view.cursor;
    let buf = state.active_buffer();
    match kind {
        MotionKind::Up => motion::up(buf, &mut view.cursor),
        MotionKind::Down => motion::down(buf, &mut view.cursor),
        MotionKind::Left => motion::left(buf, &mut view.cursor),
        MotionKind::Right => motion::right(buf, &mut view.cursor),
    }
    tracing::trace!(target: "actions.dispatch", ?kind, line=before.line, byte=before.byte, to_line=view.cursor.line, to_byte=view.cursor.byte, "motion");
    if view.cursor == before {
        DispatchResult::clean()
    } else {
        DispatchResult::moved()
    }
}
