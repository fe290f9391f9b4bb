//! Style flags and their terminal encodings.
//!
//! Only two attributes exist: the muted gutter and the reverse-video cursor
//! cell. Each styled span is self-contained: it opens its attributes and ends
//! with a full reset, so spans can be emitted or skipped independently.

use bitflags::bitflags;

/// Bright-black foreground (muted).
pub const SGR_DIM: &str = "\x1b[90m";
/// Reverse video.
pub const SGR_REVERSE: &str = "\x1b[7m";
/// Reset all attributes.
pub const SGR_RESET: &str = "\x1b[0m";

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        const DIM     = 0b0000_0001; // gutter line numbers
        const REVERSE = 0b0000_0010; // software cursor cell
    }
}

/// Append `text` to `out` wrapped in the SGR sequences for `style`.
pub fn push_styled(out: &mut String, text: &str, style: StyleFlags) {
    if style.is_empty() {
        out.push_str(text);
        return;
    }
    if style.contains(StyleFlags::DIM) {
        out.push_str(SGR_DIM);
    }
    if style.contains(StyleFlags::REVERSE) {
        out.push_str(SGR_REVERSE);
    }
    out.push_str(text);
    out.push_str(SGR_RESET);
}
