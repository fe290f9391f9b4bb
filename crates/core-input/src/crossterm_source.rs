use crate::key_token::map_key_event;
use crate::{KeySource, key_delivered, key_ignored};
use core_events::{Event, InputEvent};
use crossterm::event::{self, Event as CEvent};

/// Blocking reader over `crossterm::event::read`. Expects the terminal to be
/// in raw mode.
#[derive(Debug, Default)]
pub struct CrosstermKeySource;

impl CrosstermKeySource {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeySource {
    fn next_event(&mut self) -> anyhow::Result<Event> {
        loop {
            match event::read()? {
                CEvent::Key(k) => match map_key_event(&k) {
                    Some(key) => return Ok(key_delivered(key)),
                    None => key_ignored("crossterm", 0),
                },
                CEvent::Resize(cols, rows) => {
                    tracing::debug!(target: "input", cols, rows, "resize");
                    return Ok(Event::Input(InputEvent::Resize(cols, rows)));
                }
                // Focus, mouse and paste events are not part of the key contract.
                _ => continue,
            }
        }
    }
}
