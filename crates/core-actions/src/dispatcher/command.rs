//! Commands: save, find and the quit guard.

use super::DispatchResult;
use crate::io_ops::{WriteFileResult, write_file};
use crate::prompt::PromptKind;
use core_model::{Position, View};
use core_state::{EditorState, QuitCheck};
use std::path::PathBuf;

pub(crate) fn handle_save(state: &mut EditorState, target: Option<PathBuf>) -> DispatchResult {
    match write_file(state, target) {
        WriteFileResult::NoFilename => DispatchResult::prompt(PromptKind::SaveAs),
        WriteFileResult::Success { lines } => {
            tracing::info!(target: "runtime.command", lines, "saved");
            DispatchResult::dirty()
        }
        WriteFileResult::Error => DispatchResult::dirty(),
    }
}

/// Case-insensitive substring search over rendered rows, from row 0.
///
/// On a match the row offset is pushed past the end of the document; the
/// next `View::scroll` pulls it back so the matched row sits at the top of
/// the viewport.
pub(crate) fn handle_find(query: &str, state: &mut EditorState, view: &mut View) -> DispatchResult {
    let needle = query.to_ascii_lowercase();
    let doc = &state.document;
    for (i, row) in doc.rows().iter().enumerate() {
        let haystack = row.render().to_ascii_lowercase();
        // ASCII lowering preserves byte offsets, so `byte` is valid in `render`.
        if let Some(byte) = haystack.find(&needle) {
            let rx = row.render()[..byte].chars().count();
            view.cursor = Position::new(i, row.rx_to_cx(rx));
            view.row_offset = doc.len();
            tracing::debug!(target: "actions.dispatch", op="find", row=i, col=view.cursor.col, "match");
            return DispatchResult::dirty();
        }
    }
    state.set_status(format!("No match for \"{query}\""));
    DispatchResult::dirty()
}

pub(crate) fn handle_quit(state: &mut EditorState) -> DispatchResult {
    match state.request_quit() {
        QuitCheck::Proceed => {
            tracing::info!(target: "runtime.command", "quit");
            DispatchResult::quit()
        }
        QuitCheck::Pending { remaining } => {
            let times = if remaining == 1 { "time" } else { "times" };
            state.set_status(format!(
                "WARNING!!! File has unsaved changes. Press Ctrl-Q {remaining} more {times} to quit."
            ));
            tracing::warn!(target: "runtime.command", remaining, "quit_blocked_dirty");
            DispatchResult::dirty()
        }
    }
}
