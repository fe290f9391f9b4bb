//! High-level editor model: one `EditorState` paired with one `View`.
//!
//! A `View` owns presentation state (cursor, first visible line) so that
//! buffer editing semantics in `core-state` stay decoupled from scrolling.
//!
//! Core invariants (must hold after every public call):
//! * The view's cursor line is a valid line index for the buffer and its byte
//!   offset is at most that line's length.
//! * After `auto_scroll(h)`: `viewport_first_line <= cursor.line <
//!   viewport_first_line + h`.
//!
//! Scrolling is minimal: the view moves only as far as needed to bring the
//! cursor back in range and never re-centers.

use core_state::EditorState;
use core_text::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct View {
    pub cursor: Position,
    pub viewport_first_line: usize,
}

impl View {
    pub fn new(cursor: Position, viewport_first_line: usize) -> Self {
        Self {
            cursor,
            viewport_first_line,
        }
    }

    /// Auto-scroll this view to keep the cursor within a viewport of
    /// `text_height` rows. Returns true if the first visible line changed.
    pub fn auto_scroll(&mut self, state: &EditorState, text_height: usize) -> bool {
        let buf = state.active_buffer();
        debug_assert!(
            self.cursor.line < buf.line_count(),
            "cursor line within buffer"
        );
        debug_assert!(
            self.cursor.byte <= buf.line_byte_len(self.cursor.line),
            "cursor byte within line bounds"
        );
        match compute_scroll_intent(self.viewport_first_line, self.cursor.line, text_height) {
            Some(new_first) => {
                tracing::trace!(target: "model.scroll", from = self.viewport_first_line, to = new_first, cursor_line = self.cursor.line, "auto_scroll");
                self.viewport_first_line = new_first;
                true
            }
            None => false,
        }
    }
}

pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    /// Seed the single view at the origin (cursor (0,0), top row 0).
    pub fn new(state: EditorState) -> Self {
        Self {
            state,
            view: View::default(),
        }
    }

    /// Test/helper constructor allowing an already prepared view to be injected.
    /// The cursor is clamped into the buffer.
    pub fn with_view(mut view: View, state: EditorState) -> Self {
        let buf = state.active_buffer();
        view.cursor.line = view.cursor.line.min(buf.line_count() - 1);
        core_text::motion::clamp_col(buf, &mut view.cursor);
        Self { state, view }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }
    pub fn active_view(&self) -> &View {
        &self.view
    }
    pub fn active_view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Disjoint mutable borrows of the state and the view for edit application.
    pub fn split_state_and_active_view(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }

    /// Consume the model for saving.
    pub fn into_state(self) -> EditorState {
        self.state
    }
}

/// Compute the new first visible line so `cursor_line` lies in
/// `[first, first + text_height)`.
///
/// Returns `Some(new_first)` if a scroll is needed, else `None`. A zero height
/// is treated as one row.
pub fn compute_scroll_intent(first: usize, cursor_line: usize, text_height: usize) -> Option<usize> {
    let h = text_height.max(1);
    if cursor_line < first {
        Some(cursor_line)
    } else if cursor_line >= first + h {
        Some(cursor_line + 1 - h)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Buffer;

    fn mk(text: &str) -> (EditorState, View) {
        let st = EditorState::new(Buffer::from_str(text));
        (st, View::default())
    }

    #[test]
    fn single_view_initialized() {
        let model = EditorModel::new(EditorState::new(Buffer::from_str("hello\n")));
        let v = model.active_view();
        assert_eq!(v.cursor, Position::origin());
        assert_eq!(v.viewport_first_line, 0);
    }

    #[test]
    fn with_view_clamps_cursor() {
        let view = View::new(Position::new(9, 9), 0);
        let model = EditorModel::with_view(view, EditorState::new(Buffer::from_str("ab\ncd")));
        assert_eq!(model.active_view().cursor, Position::new(1, 2));
    }

    #[test]
    fn split_borrow_mutates_both() {
        let mut model = EditorModel::new(EditorState::new(Buffer::from_str("abc")));
        let (state, view) = model.split_state_and_active_view();
        let mut pos = view.cursor;
        state.active_buffer_mut().insert_byte(&mut pos, b'x');
        view.cursor = pos;
        assert_eq!(model.active_view().cursor.byte, 1);
        assert_eq!(model.state().active_buffer().line(0).unwrap(), b"xabc");
    }

    #[test]
    fn auto_scroll_down_and_up() {
        let (st, mut v) = mk("0\n1\n2\n3\n4\n5\n6\n7\n8\n9\n");
        let h = 5usize;
        assert!(!v.auto_scroll(&st, h));
        v.cursor.line = 4; // still inside 0..5
        assert!(!v.auto_scroll(&st, h));
        v.cursor.line = 5; // triggers scroll to first=1
        assert!(v.auto_scroll(&st, h));
        assert_eq!(v.viewport_first_line, 1);
        v.cursor.line = 9; // bottom -> new_first = 9 +1 -5 =5
        assert!(v.auto_scroll(&st, h));
        assert_eq!(v.viewport_first_line, 5);
        v.cursor.line = 3; // above first -> snap to 3
        assert!(v.auto_scroll(&st, h));
        assert_eq!(v.viewport_first_line, 3);
    }

    #[test]
    fn compute_scroll_intent_noop_inside_window() {
        assert_eq!(compute_scroll_intent(2, 2, 3), None);
        assert_eq!(compute_scroll_intent(2, 4, 3), None);
    }

    #[test]
    fn compute_scroll_intent_minimal_moves() {
        assert_eq!(compute_scroll_intent(2, 5, 3), Some(3));
        assert_eq!(compute_scroll_intent(2, 1, 3), Some(1));
        assert_eq!(compute_scroll_intent(0, 0, 0), None);
        assert_eq!(compute_scroll_intent(0, 1, 0), Some(1), "zero height acts as one row");
    }
}
