//! Key → Action translation.
//!
//! Stateless mapping from a decoded `KeyEvent` to at most one `Action`:
//!
//! | Key         | Action                  |
//! |-------------|-------------------------|
//! | arrows      | `Motion(Up/Down/Left/Right)` |
//! | Delete      | `Edit(DeleteNext)`      |
//! | Backspace   | `Edit(DeletePrev)`      |
//! | Enter       | `Edit(InsertNewline)`   |
//! | Tab         | `Edit(InsertTab)`       |
//! | Esc         | `Quit`                  |
//! | printable   | `Edit(InsertChar(b))`   |
//!
//! Anything else (non-ASCII characters, control or alt chords) yields `None`
//! and is silently ignored by the session. Shift is allowed: it is already
//! folded into the delivered character.

use crate::{Action, EditKind, MotionKind, TAB, is_insertable};
use core_events::{KeyCode, KeyEvent, KeyModifiers};

pub fn translate_key(key: &KeyEvent) -> Option<Action> {
    if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) {
        return None;
    }
    let action = match key.code {
        KeyCode::Up => Action::Motion(MotionKind::Up),
        KeyCode::Down => Action::Motion(MotionKind::Down),
        KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::Delete => Action::Edit(EditKind::DeleteNext),
        KeyCode::Backspace => Action::Edit(EditKind::DeletePrev),
        KeyCode::Enter => Action::Edit(EditKind::InsertNewline),
        KeyCode::Tab => Action::Edit(EditKind::InsertTab),
        KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) => {
            let b = u8::try_from(c).ok().filter(|b| is_insertable(*b))?;
            if b == TAB {
                Action::Edit(EditKind::InsertTab)
            } else {
                Action::Edit(EditKind::InsertChar(b))
            }
        }
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::plain(code)
    }

    #[test]
    fn named_keys_map_per_table() {
        assert_eq!(translate_key(&key(KeyCode::Up)), Some(Action::Motion(MotionKind::Up)));
        assert_eq!(translate_key(&key(KeyCode::Down)), Some(Action::Motion(MotionKind::Down)));
        assert_eq!(translate_key(&key(KeyCode::Left)), Some(Action::Motion(MotionKind::Left)));
        assert_eq!(translate_key(&key(KeyCode::Right)), Some(Action::Motion(MotionKind::Right)));
        assert_eq!(translate_key(&key(KeyCode::Delete)), Some(Action::Edit(EditKind::DeleteNext)));
        assert_eq!(translate_key(&key(KeyCode::Backspace)), Some(Action::Edit(EditKind::DeletePrev)));
        assert_eq!(translate_key(&key(KeyCode::Enter)), Some(Action::Edit(EditKind::InsertNewline)));
        assert_eq!(translate_key(&key(KeyCode::Tab)), Some(Action::Edit(EditKind::InsertTab)));
        assert_eq!(translate_key(&key(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn printable_chars_insert() {
        assert_eq!(
            translate_key(&key(KeyCode::Char('H'))),
            Some(Action::Edit(EditKind::InsertChar(b'H')))
        );
        assert_eq!(
            translate_key(&key(KeyCode::Char(' '))),
            Some(Action::Edit(EditKind::InsertChar(b' ')))
        );
        let shifted = KeyEvent {
            code: KeyCode::Char('A'),
            mods: KeyModifiers::SHIFT,
        };
        assert_eq!(translate_key(&shifted), Some(Action::Edit(EditKind::InsertChar(b'A'))));
    }

    #[test]
    fn unsupported_keys_are_ignored() {
        assert_eq!(translate_key(&key(KeyCode::Char('é'))), None);
        assert_eq!(translate_key(&key(KeyCode::Char('\u{7}'))), None);
        let ctrl = KeyEvent {
            code: KeyCode::Char('s'),
            mods: KeyModifiers::CTRL,
        };
        assert_eq!(translate_key(&ctrl), None);
    }
}
