//! Stateless key -> Action translation.
//!
//! Printable characters are recognised by an explicit range check *before*
//! the named-key table, so a modified or unmapped key can never fall through
//! into text insertion. Keys with no binding translate to `None`; the
//! dispatcher still treats them as a keystroke for the quit guard.

use crate::{Action, EditKind, MotionKind};
use core_events::{KeyCode, KeyEvent, KeyModifiers};

/// The character a key would insert, if it is plain text input.
pub fn printable_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT)
                && !c.is_control() =>
        {
            Some(c)
        }
        _ => None,
    }
}

pub fn translate_key(key: &KeyEvent) -> Option<Action> {
    if let Some(ch) = printable_char(key) {
        return Some(Action::Edit(EditKind::InsertChar(ch)));
    }
    if key.mods.contains(KeyModifiers::CTRL) {
        return match key.code {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                's' => Some(Action::Save),
                'f' => Some(Action::Find),
                'q' => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        };
    }
    let action = match key.code {
        KeyCode::Enter => Action::Edit(EditKind::InsertNewline),
        KeyCode::Backspace | KeyCode::Delete => Action::Edit(EditKind::DeleteBackward),
        KeyCode::Tab => Action::Edit(EditKind::InsertChar('\t')),
        KeyCode::Left => Action::Motion(MotionKind::Left),
        KeyCode::Right => Action::Motion(MotionKind::Right),
        KeyCode::Up => Action::Motion(MotionKind::Up),
        KeyCode::Down => Action::Motion(MotionKind::Down),
        KeyCode::Home => Action::Motion(MotionKind::LineStart),
        KeyCode::End => Action::Motion(MotionKind::LineEnd),
        KeyCode::PageUp => Action::Motion(MotionKind::PageUp),
        KeyCode::PageDown => Action::Motion(MotionKind::PageDown),
        KeyCode::Esc | KeyCode::Char(_) | KeyCode::Unknown => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_shifted_chars_insert() {
        let k = KeyEvent::plain(KeyCode::Char('a'));
        assert_eq!(
            translate_key(&k),
            Some(Action::Edit(EditKind::InsertChar('a')))
        );
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(
            translate_key(&shifted),
            Some(Action::Edit(EditKind::InsertChar('A')))
        );
    }

    #[test]
    fn ctrl_commands() {
        assert_eq!(translate_key(&KeyEvent::ctrl('s')), Some(Action::Save));
        assert_eq!(translate_key(&KeyEvent::ctrl('f')), Some(Action::Find));
        assert_eq!(translate_key(&KeyEvent::ctrl('q')), Some(Action::Quit));
        assert_eq!(translate_key(&KeyEvent::ctrl('x')), None, "unbound chord is dropped, not inserted");
    }

    #[test]
    fn alt_char_and_esc_are_dropped() {
        let alt = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(translate_key(&alt), None);
        assert_eq!(translate_key(&KeyEvent::plain(KeyCode::Esc)), None);
    }

    #[test]
    fn control_characters_are_not_printable() {
        let k = KeyEvent::plain(KeyCode::Char('\u{7}'));
        assert_eq!(printable_char(&k), None);
        assert_eq!(translate_key(&k), None);
    }

    #[test]
    fn named_keys() {
        let cases = [
            (KeyCode::Enter, Action::Edit(EditKind::InsertNewline)),
            (KeyCode::Backspace, Action::Edit(EditKind::DeleteBackward)),
            (KeyCode::Delete, Action::Edit(EditKind::DeleteBackward)),
            (KeyCode::Tab, Action::Edit(EditKind::InsertChar('\t'))),
            (KeyCode::Home, Action::Motion(MotionKind::LineStart)),
            (KeyCode::End, Action::Motion(MotionKind::LineEnd)),
            (KeyCode::PageUp, Action::Motion(MotionKind::PageUp)),
            (KeyCode::PageDown, Action::Motion(MotionKind::PageDown)),
            (KeyCode::Left, Action::Motion(MotionKind::Left)),
        ];
        for (code, expected) in cases {
            assert_eq!(translate_key(&KeyEvent::plain(code)), Some(expected), "{code:?}");
        }
    }
}
