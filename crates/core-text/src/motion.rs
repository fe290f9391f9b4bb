//! Cursor motion helpers.
//!
//! These operate purely on a `Buffer` + `Position` pair and are free of editor
//! session state. Every helper leaves the position well-formed:
//! `line < line_count()` and `byte <= line_byte_len(line)`.

use crate::{Buffer, Position};

/// Clamp the byte offset to the current line length.
pub fn clamp_col(buf: &Buffer, pos: &mut Position) {
    pos.byte = pos.byte.min(buf.line_byte_len(pos.line));
}

/// Move up one line (no-op on the first line), clamping the column.
pub fn up(buf: &Buffer, pos: &mut Position) {
    if pos.line > 0 {
        pos.line -= 1;
        clamp_col(buf, pos);
    }
}

/// Move down one line (no-op on the last line), clamping the column.
pub fn down(buf: &Buffer, pos: &mut Position) {
    if pos.line + 1 < buf.line_count() {
        pos.line += 1;
        clamp_col(buf, pos);
    }
}

/// Move left one byte, wrapping to the end of the previous line at column 0.
pub fn left(buf: &Buffer, pos: &mut Position) {
    if pos.byte > 0 {
        pos.byte -= 1;
    } else if pos.line > 0 {
        pos.line -= 1;
        pos.byte = buf.line_byte_len(pos.line);
    }
}

/// Move right one byte, wrapping to the start of the next line at end of line.
pub fn right(buf: &Buffer, pos: &mut Position) {
    if pos.byte < buf.line_byte_len(pos.line) {
        pos.byte += 1;
    } else if pos.line + 1 < buf.line_count() {
        pos.line += 1;
        pos.byte = 0;
    }
}

/// True at (0, 0).
pub fn at_buffer_start(pos: &Position) -> bool {
    pos.line == 0 && pos.byte == 0
}

/// True on the last line at (or past) its end.
pub fn at_buffer_end(buf: &Buffer, pos: &Position) -> bool {
    pos.line + 1 >= buf.line_count() && pos.byte >= buf.line_byte_len(pos.line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_moves_clamp_column() {
        let b = Buffer::from_str("long line\nab\nlonger line");
        let mut p = Position::new(0, 8);
        down(&b, &mut p);
        assert_eq!(p, Position::new(1, 2));
        down(&b, &mut p);
        assert_eq!(p, Position::new(2, 2), "column stays clamped, not restored");
        down(&b, &mut p);
        assert_eq!(p, Position::new(2, 2), "last line is a floor");
        up(&b, &mut p);
        up(&b, &mut p);
        up(&b, &mut p);
        assert_eq!(p, Position::new(0, 2));
    }

    #[test]
    fn left_wraps_to_previous_line_end() {
        let b = Buffer::from_str("abc\nd");
        let mut p = Position::new(1, 0);
        left(&b, &mut p);
        assert_eq!(p, Position::new(0, 3));
        left(&b, &mut p);
        assert_eq!(p, Position::new(0, 2));
    }

    #[test]
    fn right_wraps_to_next_line_start() {
        let b = Buffer::from_str("ab\ncd");
        let mut p = Position::new(0, 2);
        right(&b, &mut p);
        assert_eq!(p, Position::new(1, 0));
    }

    #[test]
    fn boundaries_are_noops() {
        let b = Buffer::from_str("ab\ncd");
        let mut start = Position::origin();
        left(&b, &mut start);
        assert_eq!(start, Position::origin());
        assert!(at_buffer_start(&start));

        let mut end = Position::new(1, 2);
        assert!(at_buffer_end(&b, &end));
        right(&b, &mut end);
        assert_eq!(end, Position::new(1, 2));
    }

    #[test]
    fn empty_buffer_all_moves_noop() {
        let b = Buffer::new();
        let mut p = Position::origin();
        up(&b, &mut p);
        down(&b, &mut p);
        left(&b, &mut p);
        right(&b, &mut p);
        assert_eq!(p, Position::origin());
    }
}
