//! Editor actions: the vocabulary between key translation and buffer mutation.
//!
//! Flow per key: `core-input` decodes a raw key → `key_translator::translate_key`
//! maps it to an `Action` → `dispatcher::dispatch` applies it atomically to the
//! `EditorModel`. Load and save live in `io_ops`.

pub mod dispatcher;
pub mod io_ops;
pub mod key_translator;

pub use dispatcher::{DispatchResult, dispatch};
pub use key_translator::translate_key;

/// Buffer mutations. Each is total over the valid state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Printable ASCII byte (0x20..=0x7E) or HT.
    InsertChar(u8),
    InsertTab,
    InsertNewline,
    /// Backspace.
    DeletePrev,
    /// Forward delete.
    DeleteNext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit(EditKind),
    Motion(MotionKind),
    Quit,
}

pub const TAB: u8 = b'\t';

/// Bytes accepted by `InsertChar`: printable ASCII plus horizontal tab.
pub fn is_insertable(b: u8) -> bool {
    b == TAB || (0x20..=0x7e).contains(&b)
}
