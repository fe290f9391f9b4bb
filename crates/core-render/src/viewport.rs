//! Viewport abstraction: the visible vertical window into the buffer.
//!
//! * `first_line` is the index of the topmost buffer line to render.
//! * `height` is the number of screen rows available for buffer text.
//!
//! The window always spans exactly `height` rows even when the buffer is
//! shorter; the frame builder fills rows past the end with placeholders.
//! Scroll decisions live with the view in `core-model`; this type only
//! projects the result.

use core_model::View;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub first_line: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(first_line: usize, height: usize) -> Self {
        Self {
            first_line,
            height: height.max(1),
        }
    }

    pub fn from_view(view: &View, height: usize) -> Self {
        Self::new(view.viewport_first_line, height)
    }

    /// Buffer row indices covered by the window, `[first_line, first_line + height)`.
    pub fn rows(&self) -> Range<usize> {
        self.first_line..self.first_line + self.height
    }

    pub fn contains(&self, line: usize) -> bool {
        self.rows().contains(&line)
    }
}
