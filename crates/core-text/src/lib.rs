//! Line-oriented text buffer.
//!
//! The buffer is an ordered sequence of lines, each a raw byte vector. Newlines
//! are never stored inside a line; they are implicit between adjacent lines.
//! All column arithmetic is in bytes, so a cursor offset always indexes
//! directly into `line(row)`.
//!
//! Invariants (hold after every public call):
//! * `line_count() >= 1`: an empty document is exactly one empty line.
//! * No stored line contains `\n`.

use std::borrow::Cow;
use thiserror::Error;

pub mod motion;

pub const LF: u8 = b'\n';

/// Errors raised by the structural line primitives.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    #[error("line {index} out of range (line count {count})")]
    OutOfRange { index: usize, count: usize },
    #[error("cannot erase the only remaining line")]
    LastLine,
    #[error("line content may not contain a newline")]
    EmbeddedNewline,
}

/// A position inside a buffer expressed as (line index, byte offset within that line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub byte: usize,
}

impl Position {
    pub fn new(line: usize, byte: usize) -> Self {
        Self { line, byte }
    }
    pub fn origin() -> Self {
        Self { line: 0, byte: 0 }
    }
}

/// The line store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Vec<u8>>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// An empty document: a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    /// Build a buffer from file content split at LF boundaries. A trailing LF
    /// does not produce an extra empty line; empty content yields one empty line.
    pub fn from_bytes(content: &[u8]) -> Self {
        let body = content.strip_suffix(&[LF]).unwrap_or(content);
        if content.is_empty() {
            return Self::new();
        }
        Self {
            lines: body.split(|b| *b == LF).map(<[u8]>::to_vec).collect(),
        }
    }

    /// Convenience for tests and in-memory documents.
    pub fn from_str(content: &str) -> Self {
        Self::from_bytes(content.as_bytes())
    }

    /// Build a buffer from already split lines. Any LF inside a line splits it further.
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let mut out: Vec<Vec<u8>> = Vec::new();
        for l in lines {
            out.extend(l.as_ref().split(|b| *b == LF).map(<[u8]>::to_vec));
        }
        if out.is_empty() {
            out.push(Vec::new());
        }
        Self { lines: out }
    }

    /// Serialize for saving: every line, including the last, is followed by one LF.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total: usize = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for l in &self.lines {
            out.extend_from_slice(l);
            out.push(LF);
        }
        out
    }

    /// Total number of lines in the buffer (always >= 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Borrow a line's bytes.
    pub fn line(&self, idx: usize) -> Option<&[u8]> {
        self.lines.get(idx).map(Vec::as_slice)
    }

    /// Line content as text for display. Invalid UTF-8 is replaced, never panics.
    pub fn line_lossy(&self, idx: usize) -> Option<Cow<'_, str>> {
        self.line(idx).map(String::from_utf8_lossy)
    }

    /// Byte length of a line; 0 for an out of range index.
    pub fn line_byte_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, Vec::len)
    }

    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }

    pub fn set_line(&mut self, idx: usize, content: Vec<u8>) -> Result<(), TextError> {
        if content.contains(&LF) {
            return Err(TextError::EmbeddedNewline);
        }
        let count = self.lines.len();
        let slot = self
            .lines
            .get_mut(idx)
            .ok_or(TextError::OutOfRange { index: idx, count })?;
        *slot = content;
        Ok(())
    }

    /// Insert a line at `idx`, shifting lines `idx..` down. `idx == line_count()` appends.
    pub fn insert_line(&mut self, idx: usize, content: Vec<u8>) -> Result<(), TextError> {
        if content.contains(&LF) {
            return Err(TextError::EmbeddedNewline);
        }
        if idx > self.lines.len() {
            return Err(TextError::OutOfRange {
                index: idx,
                count: self.lines.len(),
            });
        }
        self.lines.insert(idx, content);
        Ok(())
    }

    /// Remove and return line `idx`. Refuses to leave the store empty; callers
    /// clearing the final line use `set_line(0, Vec::new())` instead.
    pub fn erase_line(&mut self, idx: usize) -> Result<Vec<u8>, TextError> {
        if idx >= self.lines.len() {
            return Err(TextError::OutOfRange {
                index: idx,
                count: self.lines.len(),
            });
        }
        if self.lines.len() == 1 {
            return Err(TextError::LastLine);
        }
        Ok(self.lines.remove(idx))
    }

    /// Insert a byte at `pos`; a byte offset at or past the line end appends.
    /// Advances `pos` past the inserted byte. No-op for LF or an invalid line.
    pub fn insert_byte(&mut self, pos: &mut Position, b: u8) {
        if b == LF {
            return;
        }
        let Some(line) = self.lines.get_mut(pos.line) else {
            return;
        };
        if pos.byte >= line.len() {
            line.push(b);
            pos.byte = line.len();
        } else {
            line.insert(pos.byte, b);
            pos.byte += 1;
        }
    }

    /// Remove the byte at (line, byte). Returns the removed byte, `None` at or past line end.
    pub fn remove_byte(&mut self, line: usize, byte: usize) -> Option<u8> {
        let l = self.lines.get_mut(line)?;
        if byte < l.len() {
            Some(l.remove(byte))
        } else {
            None
        }
    }

    /// Split line `line` at `byte`: the line keeps `[0, byte)` and `[byte, ..)`
    /// becomes a new line directly below. Offsets past the end split at the end.
    pub fn split_line(&mut self, line: usize, byte: usize) -> Result<(), TextError> {
        let count = self.lines.len();
        let current = self
            .lines
            .get_mut(line)
            .ok_or(TextError::OutOfRange { index: line, count })?;
        let at = byte.min(current.len());
        let right = current.split_off(at);
        self.lines.insert(line + 1, right);
        Ok(())
    }

    /// Append line `line + 1` onto line `line` and erase it. Returns the byte
    /// length `line` had before the join (the seam offset).
    pub fn join_with_next(&mut self, line: usize) -> Result<usize, TextError> {
        if line + 1 >= self.lines.len() {
            return Err(TextError::OutOfRange {
                index: line + 1,
                count: self.lines.len(),
            });
        }
        let next = self.lines.remove(line + 1);
        let current = &mut self.lines[line];
        let seam = current.len();
        current.extend_from_slice(&next);
        Ok(seam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(b: &Buffer) -> Vec<String> {
        b.lines()
            .map(|l| String::from_utf8_lossy(l).into_owned())
            .collect()
    }

    #[test]
    fn create_buffer_and_read_line() {
        let b = Buffer::from_str("hello\nworld");
        assert_eq!(b.line_count(), 2);
        assert_eq!(b.line(0).unwrap(), b"hello");
        assert_eq!(b.line(1).unwrap(), b"world");
        assert!(b.line(2).is_none());
    }

    #[test]
    fn trailing_newline_adds_no_empty_line() {
        let b = Buffer::from_str("a\nb\n");
        assert_eq!(texts(&b), vec!["a", "b"]);
        let b = Buffer::from_str("a\nb\n\n");
        assert_eq!(texts(&b), vec!["a", "b", ""]);
    }

    #[test]
    fn empty_content_is_single_empty_line() {
        assert_eq!(Buffer::from_bytes(b"").line_count(), 1);
        assert_eq!(Buffer::from_bytes(b"\n").line_count(), 1);
        assert_eq!(Buffer::from_lines(Vec::<Vec<u8>>::new()).line_count(), 1);
    }

    #[test]
    fn carriage_returns_are_kept() {
        let b = Buffer::from_str("a\r\nb\r\n");
        assert_eq!(b.line(0).unwrap(), b"a\r");
        assert_eq!(b.to_bytes(), b"a\r\nb\r\n");
    }

    #[test]
    fn to_bytes_terminates_every_line() {
        let b = Buffer::from_lines(["x", "", "y"]);
        assert_eq!(b.to_bytes(), b"x\n\ny\n");
        assert_eq!(Buffer::new().to_bytes(), b"\n");
    }

    #[test]
    fn erase_refuses_last_line() {
        let mut b = Buffer::from_str("only");
        assert_eq!(b.erase_line(0), Err(TextError::LastLine));
        assert_eq!(
            b.erase_line(3),
            Err(TextError::OutOfRange { index: 3, count: 1 })
        );
        b.set_line(0, Vec::new()).unwrap();
        assert_eq!(b.line_count(), 1);
        assert_eq!(b.line_byte_len(0), 0);
    }

    #[test]
    fn set_and_insert_reject_newlines() {
        let mut b = Buffer::new();
        assert_eq!(
            b.set_line(0, b"a\nb".to_vec()),
            Err(TextError::EmbeddedNewline)
        );
        assert_eq!(
            b.insert_line(1, b"\n".to_vec()),
            Err(TextError::EmbeddedNewline)
        );
        b.insert_line(1, b"tail".to_vec()).unwrap();
        b.insert_line(0, b"head".to_vec()).unwrap();
        assert_eq!(texts(&b), vec!["head", "", "tail"]);
    }

    #[test]
    fn insert_byte_middle_and_end() {
        let mut b = Buffer::from_str("ac");
        let mut pos = Position::new(0, 1);
        b.insert_byte(&mut pos, b'b');
        assert_eq!(b.line(0).unwrap(), b"abc");
        assert_eq!(pos.byte, 2);
        let mut end = Position::new(0, 99);
        b.insert_byte(&mut end, b'd');
        assert_eq!(b.line(0).unwrap(), b"abcd");
        assert_eq!(end.byte, 4);
    }

    #[test]
    fn split_and_join_are_inverse() {
        let mut b = Buffer::from_str("abcd");
        b.split_line(0, 2).unwrap();
        assert_eq!(texts(&b), vec!["ab", "cd"]);
        let seam = b.join_with_next(0).unwrap();
        assert_eq!(seam, 2);
        assert_eq!(texts(&b), vec!["abcd"]);
        assert!(b.join_with_next(0).is_err());
    }

    #[test]
    fn remove_byte_at_end_is_none() {
        let mut b = Buffer::from_str("hi");
        assert_eq!(b.remove_byte(0, 2), None);
        assert_eq!(b.remove_byte(0, 0), Some(b'h'));
        assert_eq!(b.line(0).unwrap(), b"i");
    }

    #[test]
    fn lossy_line_never_panics_on_invalid_utf8() {
        let b = Buffer::from_bytes(&[0xff, b'a']);
        assert_eq!(b.line_lossy(0).unwrap(), "\u{fffd}a");
    }
}
