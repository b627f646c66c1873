//! Input dispatcher: key events to editor actions to state mutations.
//!
//! Two stages keep the state machine testable without a terminal:
//! 1. `translate_key` maps a `KeyEvent` to an `Action` (or drops it).
//! 2. `dispatch` applies the action to the `EditorModel` and reports what the
//!    session must do next through `DispatchResult`.
//!
//! Commands that need a line of user input (save-as, find) do not block
//! here. `dispatch` returns `DispatchResult::prompt(kind)`; the session runs
//! the modal `Prompt` loop and feeds the answer back as `Action::SaveAs` or
//! `Action::FindQuery`.

use std::path::PathBuf;

pub mod dispatcher;
pub mod io_ops;
mod key_translator;
mod prompt;

pub use dispatcher::{DispatchResult, dispatch, dispatch_key};
pub use key_translator::{printable_char, translate_key};
pub use prompt::{Prompt, PromptKind, PromptStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    /// Save to the current file name, prompting for one if unset.
    Save,
    SaveAs(PathBuf),
    /// Ask for a search query.
    Find,
    FindQuery(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertChar(char),
    InsertNewline,
    /// Backspace and Delete: remove the character before the cursor,
    /// merging with the previous row at column 0.
    DeleteBackward,
}
