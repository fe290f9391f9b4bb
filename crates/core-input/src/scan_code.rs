//! Two-stage scan-code decoding.
//!
//! Printable keys arrive as single bytes. Navigation and delete keys arrive as
//! a lead byte (0 or 0xE0) followed by a scan code: Up 72, Down 80, Left 75,
//! Right 77, Delete 83. Control bytes: Escape 27, Enter 13, Tab 9,
//! Backspace 8 (127 is accepted as Backspace too).

use crate::{KeySource, key_delivered, key_ignored};
use core_events::{Event, KeyCode, KeyEvent};
use std::io::{ErrorKind, Read};

pub const LEAD_NUL: u8 = 0x00;
pub const LEAD_EXT: u8 = 0xE0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DecodeState {
    #[default]
    Idle,
    /// A lead byte was read; the next byte is a scan code.
    AwaitScan(u8),
}

/// Byte-at-a-time decoder. Feed bytes in arrival order.
#[derive(Debug, Default)]
pub struct ScanCodeDecoder {
    state: DecodeState,
}

impl ScanCodeDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one byte; returns a key once a complete sequence is seen.
    pub fn feed(&mut self, b: u8) -> Option<KeyCode> {
        match self.state {
            DecodeState::AwaitScan(_) => {
                self.state = DecodeState::Idle;
                let code = scan_code_key(b);
                if code.is_none() {
                    key_ignored("scan_code", u32::from(b));
                }
                code
            }
            DecodeState::Idle => match b {
                LEAD_NUL | LEAD_EXT => {
                    self.state = DecodeState::AwaitScan(b);
                    None
                }
                27 => Some(KeyCode::Esc),
                13 => Some(KeyCode::Enter),
                9 => Some(KeyCode::Tab),
                8 | 127 => Some(KeyCode::Backspace),
                other => Some(KeyCode::Char(char::from(other))),
            },
        }
    }

    /// True when a lead byte is waiting for its scan code.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, DecodeState::AwaitScan(_))
    }

    /// Drop any half-read sequence. A lone lead byte yields no key.
    pub fn reset(&mut self) {
        if let DecodeState::AwaitScan(lead) = self.state {
            key_ignored("lead_byte", u32::from(lead));
        }
        self.state = DecodeState::Idle;
    }
}

fn scan_code_key(scan: u8) -> Option<KeyCode> {
    Some(match scan {
        72 => KeyCode::Up,
        80 => KeyCode::Down,
        75 => KeyCode::Left,
        77 => KeyCode::Right,
        83 => KeyCode::Delete,
        _ => return None,
    })
}

/// Key source reading the two-stage encoding from a byte stream.
pub struct ByteKeySource<R> {
    reader: R,
    decoder: ScanCodeDecoder,
    exhausted: bool,
}

impl<R: Read> ByteKeySource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            decoder: ScanCodeDecoder::new(),
            exhausted: false,
        }
    }

    fn read_byte(&mut self) -> anyhow::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<R: Read> KeySource for ByteKeySource<R> {
    fn next_event(&mut self) -> anyhow::Result<Event> {
        while !self.exhausted {
            match self.read_byte()? {
                Some(b) => {
                    if let Some(code) = self.decoder.feed(b) {
                        return Ok(key_delivered(KeyEvent::plain(code)));
                    }
                }
                None => {
                    self.decoder.reset();
                    self.exhausted = true;
                }
            }
        }
        Ok(Event::Shutdown)
    }
}
