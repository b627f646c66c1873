//! Text edit action handling (insert/newline/delete-backward).
//!
//! All mutations flow through `Document` so the dirty counter and the row
//! render cache are updated in the same call as the text change.

use super::DispatchResult;
use crate::EditKind;
use core_model::View;
use core_state::EditorState;

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let before = view.cursor;
    let doc = &mut state.document;
    match kind {
        EditKind::InsertChar(ch) => {
            let len = doc.len();
            if view.cursor.row == len {
                doc.insert_row(len, "");
            }
            doc.insert_char(view.cursor.row, view.cursor.col, ch);
            view.cursor.col += 1;
            tracing::trace!(target: "actions.dispatch", op="insert_char", ch=%ch.escape_debug(), row=before.row, col=before.col, "edit");
        }
        EditKind::InsertNewline => {
            if view.cursor.col == 0 {
                doc.insert_row(view.cursor.row, "");
            } else {
                doc.split_row(view.cursor.row, view.cursor.col);
            }
            view.cursor.row += 1;
            view.cursor.col = 0;
            tracing::trace!(target: "actions.dispatch", op="insert_newline", row=before.row, col=before.col, "edit");
        }
        EditKind::DeleteBackward => {
            if view.cursor.row == 0 && view.cursor.col == 0 {
                return DispatchResult::clean();
            }
            if view.cursor.row >= doc.len() {
                // Virtual row: nothing to delete, step back onto the last row.
                view.cursor.row = doc.len().saturating_sub(1);
                view.cursor.col = doc.row_len(view.cursor.row);
                return DispatchResult::dirty();
            }
            if view.cursor.col == 0 {
                let prev_len = doc.row_len(view.cursor.row - 1);
                doc.merge_into_previous(view.cursor.row);
                view.cursor.row -= 1;
                view.cursor.col = prev_len;
            } else {
                doc.delete_char(view.cursor.row, view.cursor.col - 1);
                view.cursor.col -= 1;
            }
            tracing::trace!(target: "actions.dispatch", op="delete_backward", row=before.row, col=before.col, to_row=view.cursor.row, to_col=view.cursor.col, "edit");
        }
    }
    DispatchResult::dirty()
}
