//! Dispatcher applying `Action` to mutable editor state.
//!
//! Sub-modules:
//! * `motion`  - cursor movement
//! * `edit`    - text mutation (insert/newline/delete-backward)
//! * `command` - save, find and the quit guard
//!
//! Every handler leaves the cursor satisfying the view invariant
//! (`cursor.row <= rows.len()`, `cursor.col <= row_len`).

use crate::{Action, translate_key};
use crate::prompt::PromptKind;
use core_events::KeyEvent;
use core_model::EditorModel;

mod command;
mod edit;
mod motion;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Document or view changed.
    pub dirty: bool,
    /// The session should clear the screen and exit.
    pub quit: bool,
    /// The command needs a line of user input before it can complete.
    pub prompt: Option<PromptKind>,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
            prompt: None,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
            prompt: None,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
            prompt: None,
        }
    }
    pub fn prompt(kind: PromptKind) -> Self {
        Self {
            dirty: true,
            quit: false,
            prompt: Some(kind),
        }
    }
}

/// Apply an action to the model.
///
/// Every action except `Quit` restores the quit confirmation counter.
pub fn dispatch(action: Action, model: &mut EditorModel) -> DispatchResult {
    let (state, view) = model.split_state_and_view();
    if !matches!(action, Action::Quit) {
        state.reset_quit_confirmations();
    }
    let result = match action {
        Action::Motion(kind) => motion::handle_motion(kind, state, view),
        Action::Edit(kind) => edit::handle_edit(kind, state, view),
        Action::Save => command::handle_save(state, None),
        Action::SaveAs(path) => command::handle_save(state, Some(path)),
        Action::Find => DispatchResult::prompt(PromptKind::Find),
        Action::FindQuery(query) => command::handle_find(&query, state, view),
        Action::Quit => command::handle_quit(state),
    };
    debug_assert!(view.cursor_is_valid(&state.document), "cursor invariant");
    result
}

/// Translate and dispatch one key. Unbound keys still count as "another
/// keystroke" for the quit guard.
pub fn dispatch_key(key: &KeyEvent, model: &mut EditorModel) -> DispatchResult {
    match translate_key(key) {
        Some(action) => {
            tracing::trace!(target: "actions.dispatch", %key, ?action, "key");
            dispatch(action, model)
        }
        None => {
            tracing::trace!(target: "actions.dispatch", %key, "unbound_key");
            model.state_mut().reset_quit_confirmations();
            DispatchResult::clean()
        }
    }
}
