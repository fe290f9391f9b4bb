//! Rendering primitives: frame assembly from a read-only editor snapshot, plus
//! the row-diffing engine that emits frames to the terminal.
//!
//! A `Frame` is exactly `height` rows. For each visible buffer row it holds a
//! muted gutter (1-based line number left-aligned in `digits(N) + 1` columns,
//! then one separator space) followed by the line text. The cursor row has a
//! reverse-video space inserted at the cursor's byte offset, so the text from
//! the cursor onward shifts right by one cell. Rows past the end of the buffer
//! are a single `~`.
//!
//! Invariants:
//! * Exactly one reverse-video cell per frame (the cursor is always visible
//!   once the view has been auto-scrolled).
//! * Row text never contains `\n`; rows are positioned by the writer, not by
//!   newlines, so frames are safe to emit in raw mode.
//! * Frame assembly is pure: it borrows state and view for the duration of one
//!   call and mutates nothing.
//!
//! Exposed Components:
//! - `Frame` / `FrameRow` / `Span`: logical rows of styled text.
//! - `style`: style flags and their SGR encodings.
//! - `viewport`: visible row window derived from a view.
//! - `writer`: terminal command list (MoveTo, ClearLine, ClearAll, Print).
//! - `render_engine`: full vs changed-rows emission with a previous-frame cache.
//! - `partial_metrics`: counters for the chosen emission path.
//!
//! Tab bytes pass through untouched; the terminal expands them. Cursor
//! placement on lines containing tabs is therefore visually approximate.

use core_model::View;
use core_state::EditorState;
use std::borrow::Cow;

pub mod partial_metrics;
pub mod render_engine;
pub mod style;
pub mod viewport;
pub mod writer;

use style::StyleFlags;
use viewport::Viewport;

/// Placeholder emitted for rows beyond the last buffer line.
pub const FILLER: &str = "~";

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: StyleFlags,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: StyleFlags::empty(),
        }
    }
    pub fn styled(text: impl Into<String>, style: StyleFlags) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameRow {
    pub spans: Vec<Span>,
}

impl FrameRow {
    /// Row text with styles stripped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Row text with SGR sequences (`ESC[90m`, `ESC[7m`, `ESC[0m`) applied.
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            style::push_styled(&mut out, &span.text, span.style);
        }
        out
    }

    /// Whether any span carries reverse video.
    pub fn has_cursor(&self) -> bool {
        self.spans
            .iter()
            .any(|s| s.style.contains(StyleFlags::REVERSE))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<FrameRow>,
}

impl Frame {
    pub fn height(&self) -> usize {
        self.rows.len()
    }
    pub fn ansi_rows(&self) -> Vec<String> {
        self.rows.iter().map(FrameRow::to_ansi).collect()
    }
}

/// Number of decimal digits in `n` (at least 1).
pub fn digit_count(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Gutter text for 1-based `line_no` in a buffer of `line_count` lines:
/// the number padded on the right to `digits(line_count) + 1`, then one space.
pub fn gutter_text(line_no: usize, line_count: usize) -> String {
    let width = digit_count(line_count) + 1;
    format!("{line_no:<width$} ")
}

/// Assemble the frame for the view's current window of `height` rows.
pub fn build_frame(state: &EditorState, view: &View, height: usize) -> Frame {
    let buf = state.active_buffer();
    let vp = Viewport::from_view(view, height);
    let n = buf.line_count();
    let rows = vp
        .rows()
        .map(|i| match buf.line(i) {
            Some(line) => {
                let cursor = (i == view.cursor.line).then_some(view.cursor.byte);
                text_row(i, n, line, cursor)
            }
            None => FrameRow {
                spans: vec![Span::plain(FILLER)],
            },
        })
        .collect();
    Frame { rows }
}

fn text_row(idx: usize, line_count: usize, line: &[u8], cursor: Option<usize>) -> FrameRow {
    let mut spans = vec![Span::styled(
        gutter_text(idx + 1, line_count),
        StyleFlags::DIM,
    )];
    match cursor {
        None => push_plain(&mut spans, String::from_utf8_lossy(line)),
        Some(col) => {
            let col = col.min(line.len());
            push_plain(&mut spans, String::from_utf8_lossy(&line[..col]));
            spans.push(Span::styled(" ", StyleFlags::REVERSE));
            push_plain(&mut spans, String::from_utf8_lossy(&line[col..]));
        }
    }
    FrameRow { spans }
}

fn push_plain(spans: &mut Vec<Span>, text: Cow<'_, str>) {
    if !text.is_empty() {
        spans.push(Span::plain(text));
    }
}
