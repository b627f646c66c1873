//! Modal line input.
//!
//! `Prompt` is only the accumulator state machine; the session owns the
//! blocking loop that re-renders the frame and reads the next key. Enter on
//! an empty accumulator keeps prompting, which is distinct from Esc
//! (explicit cancellation).

use crate::Action;
use crate::key_translator::printable_char;
use core_events::{KeyCode, KeyEvent};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Find,
}

impl PromptKind {
    fn caption(self) -> &'static str {
        match self {
            PromptKind::SaveAs => "Save as",
            PromptKind::Find => "Search",
        }
    }

    /// Message shown when the user presses Esc.
    pub fn cancel_message(self) -> &'static str {
        match self {
            PromptKind::SaveAs => "Save aborted",
            PromptKind::Find => "Search aborted",
        }
    }

    /// Action carrying the confirmed input.
    pub fn into_action(self, input: String) -> Action {
        match self {
            PromptKind::SaveAs => Action::SaveAs(PathBuf::from(input)),
            PromptKind::Find => Action::FindQuery(input),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    Continue,
    Submit(String),
    Cancel,
}

#[derive(Debug, Clone)]
pub struct Prompt {
    kind: PromptKind,
    input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Message bar text: caption, accumulator and the cancel hint.
    pub fn label(&self) -> String {
        format!("{}: {} (ESC to cancel)", self.kind.caption(), self.input)
    }

    pub fn feed(&mut self, key: &KeyEvent) -> PromptStep {
        match key.code {
            KeyCode::Esc => PromptStep::Cancel,
            KeyCode::Enter if !self.input.is_empty() => {
                PromptStep::Submit(std::mem::take(&mut self.input))
            }
            KeyCode::Enter => PromptStep::Continue,
            KeyCode::Backspace | KeyCode::Delete => {
                self.input.pop();
                PromptStep::Continue
            }
            _ => {
                if let Some(ch) = printable_char(key) {
                    self.input.push(ch);
                }
                PromptStep::Continue
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(p: &mut Prompt, s: &str) {
        for ch in s.chars() {
            assert_eq!(p.feed(&KeyEvent::plain(KeyCode::Char(ch))), PromptStep::Continue);
        }
    }

    #[test]
    fn enter_submits_accumulated_text() {
        let mut p = Prompt::new(PromptKind::SaveAs);
        type_str(&mut p, "out.txt");
        assert_eq!(p.label(), "Save as: out.txt (ESC to cancel)");
        assert_eq!(
            p.feed(&KeyEvent::plain(KeyCode::Enter)),
            PromptStep::Submit("out.txt".into())
        );
    }

    #[test]
    fn empty_enter_keeps_prompting() {
        let mut p = Prompt::new(PromptKind::Find);
        assert_eq!(p.feed(&KeyEvent::plain(KeyCode::Enter)), PromptStep::Continue);
        assert_eq!(p.input(), "");
    }

    #[test]
    fn backspace_edits_and_esc_cancels() {
        let mut p = Prompt::new(PromptKind::Find);
        type_str(&mut p, "abc");
        p.feed(&KeyEvent::plain(KeyCode::Backspace));
        assert_eq!(p.input(), "ab");
        p.feed(&KeyEvent::plain(KeyCode::Backspace));
        p.feed(&KeyEvent::plain(KeyCode::Backspace));
        p.feed(&KeyEvent::plain(KeyCode::Backspace));
        assert_eq!(p.input(), "", "backspace on empty input is harmless");
        assert_eq!(p.feed(&KeyEvent::plain(KeyCode::Esc)), PromptStep::Cancel);
    }

    #[test]
    fn control_chords_are_ignored() {
        let mut p = Prompt::new(PromptKind::Find);
        p.feed(&KeyEvent::ctrl('s'));
        p.feed(&KeyEvent::plain(KeyCode::Up));
        assert_eq!(p.input(), "");
    }

    #[test]
    fn kinds_map_to_actions() {
        assert_eq!(
            PromptKind::Find.into_action("x".into()),
            Action::FindQuery("x".into())
        );
        assert_eq!(
            PromptKind::SaveAs.into_action("a.txt".into()),
            Action::SaveAs(PathBuf::from("a.txt"))
        );
    }
}
