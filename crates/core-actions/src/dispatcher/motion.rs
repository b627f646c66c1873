//! Motion sub-dispatch (cursor movement).
//!
//! Edge behavior:
//! * Left at column 0 wraps to the end of the previous row.
//! * Right at the end of a row wraps to column 0 of the next row; it never
//!   walks onto the virtual row past the end.
//! * Up/Down stay within real rows, then clamp the column to the new row.
//! * PageUp/PageDown jump to the top/bottom viewport row, then repeat the
//!   single-row step `viewport_rows` times.

use super::DispatchResult;
use crate::MotionKind;
use core_model::View;
use core_state::{Document, EditorState};

pub(crate) fn handle_motion(
    kind: MotionKind,
    state: &mut EditorState,
    view: &mut View,
) -> DispatchResult {
    let doc = &state.document;
    let before = view.cursor;
    match kind {
        MotionKind::Left => move_left(doc, view),
        MotionKind::Right => move_right(doc, view),
        MotionKind::Up => move_up(doc, view),
        MotionKind::Down => move_down(doc, view),
        MotionKind::LineStart => view.cursor.col = 0,
        MotionKind::LineEnd => view.cursor.col = doc.row_len(view.cursor.row),
        MotionKind::PageUp => {
            view.cursor.row = view.row_offset;
            view.clamp_cursor(doc);
            for _ in 0..view.viewport_rows {
                move_up(doc, view);
            }
        }
        MotionKind::PageDown => {
            let bottom = (view.row_offset + view.viewport_rows).saturating_sub(1);
            view.cursor.row = bottom.min(doc.len().saturating_sub(1));
            view.clamp_cursor(doc);
            for _ in 0..view.viewport_rows {
                move_down(doc, view);
            }
        }
    }
    if before != view.cursor {
        tracing::trace!(target: "actions.dispatch", motion=?kind, row=before.row, col=before.col, to_row=view.cursor.row, to_col=view.cursor.col, "motion");
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

fn move_left(doc: &Document, view: &mut View) {
    if view.cursor.col > 0 {
        view.cursor.col -= 1;
    } else if view.cursor.row > 0 {
        view.cursor.row -= 1;
        view.cursor.col = doc.row_len(view.cursor.row);
    }
}

fn move_right(doc: &Document, view: &mut View) {
    if view.cursor.row >= doc.len() {
        return;
    }
    if view.cursor.col < doc.row_len(view.cursor.row) {
        view.cursor.col += 1;
    } else if view.cursor.row + 1 < doc.len() {
        view.cursor.row += 1;
        view.cursor.col = 0;
    }
}

fn move_up(doc: &Document, view: &mut View) {
    if view.cursor.row > 0 {
        view.cursor.row -= 1;
    }
    clamp_col(doc, view);
}

fn move_down(doc: &Document, view: &mut View) {
    if view.cursor.row + 1 < doc.len() {
        view.cursor.row += 1;
    }
    clamp_col(doc, view);
}

fn clamp_col(doc: &Document, view: &mut View) {
    let len = doc.row_len(view.cursor.row);
    if view.cursor.col > len {
        view.cursor.col = len;
    }
}
