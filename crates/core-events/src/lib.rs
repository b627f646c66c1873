//! Key event vocabulary shared by the terminal transport and the dispatcher.
//!
//! The transport translates whatever its backend reports into these types so
//! nothing above `core-terminal` ever sees a crossterm type. Only the keys the
//! editor reacts to get a named variant; everything else is dropped at the
//! transport boundary.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    /// Unmodified key.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// `Ctrl-<ch>` chord. The character is stored lowercase.
    pub fn ctrl(ch: char) -> Self {
        Self::new(KeyCode::Char(ch.to_ascii_lowercase()), KeyModifiers::CTRL)
    }

    pub fn is_ctrl(&self, ch: char) -> bool {
        self.mods.contains(KeyModifiers::CTRL)
            && matches!(self.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// A key press with no editor meaning (function keys, Insert, ...).
    Unknown,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_display() {
        let k = KeyEvent {
            code: KeyCode::Char('x'),
            mods: KeyModifiers::CTRL,
        };
        let s = format!("{}", k);
        assert!(s.contains("Char"));
    }

    #[test]
    fn ctrl_helper_matches_either_case() {
        let k = KeyEvent::ctrl('Q');
        assert_eq!(k.code, KeyCode::Char('q'));
        assert!(k.is_ctrl('q'));
        assert!(k.is_ctrl('Q'));
        assert!(!k.is_ctrl('s'));
    }

    #[test]
    fn plain_key_is_not_ctrl() {
        let k = KeyEvent::plain(KeyCode::Char('q'));
        assert!(!k.is_ctrl('q'));
        assert!(k.mods.is_empty());
    }
}
