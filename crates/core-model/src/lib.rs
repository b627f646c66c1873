//! High-level editor model: the view over the single document.
//!
//! A `View` owns presentation state: the logical cursor, the scroll offsets
//! of the viewport's top-left corner and the viewport size. It is kept apart
//! from `EditorState` so buffer editing semantics do not depend on viewport
//! concerns.
//!
//! Coordinates:
//! * `cursor.row` indexes document rows and may equal `rows.len()` (the
//!   virtual row past the last line, used for appending).
//! * `cursor.col` is a column in the row's *stored* text. The render column
//!   (tabs expanded) is derived on demand via `Row::cx_to_rx`; horizontal
//!   scrolling works in render columns.
//! * `row_offset` is a document row, `col_offset` a render column.
//!
//! Core invariants (must hold after every cursor move):
//! * `cursor.row <= rows.len()`.
//! * `cursor.col <= row_len(cursor.row)` (0 on the virtual row).
//!
//! The viewport size is fixed for the session; it comes from the terminal
//! size at startup.

use core_state::{Document, EditorState};

/// Logical cursor position (document row, stored-text column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }
}

#[derive(Debug, Clone)]
pub struct View {
    pub cursor: Position,
    pub row_offset: usize,
    pub col_offset: usize,
    pub viewport_rows: usize,
    pub viewport_cols: usize,
}

impl View {
    pub fn new(viewport_rows: usize, viewport_cols: usize) -> Self {
        Self {
            cursor: Position::origin(),
            row_offset: 0,
            col_offset: 0,
            viewport_rows,
            viewport_cols,
        }
    }

    /// Render column of the cursor (tabs expanded).
    pub fn render_col(&self, doc: &Document) -> usize {
        doc.row(self.cursor.row)
            .map(|r| r.cx_to_rx(self.cursor.col))
            .unwrap_or(0)
    }

    /// Adjust the offsets so the cursor lies inside the viewport.
    ///
    /// Four independent clamps, applied in order. A zero-sized viewport is
    /// treated as one cell so the offsets still track the cursor.
    pub fn scroll(&mut self, doc: &Document) {
        let rows = self.viewport_rows.max(1);
        let cols = self.viewport_cols.max(1);
        let rx = self.render_col(doc);
        let before = (self.row_offset, self.col_offset);
        if self.cursor.row < self.row_offset {
            self.row_offset = self.cursor.row;
        }
        if self.cursor.row >= self.row_offset + rows {
            self.row_offset = self.cursor.row - rows + 1;
        }
        if rx < self.col_offset {
            self.col_offset = rx;
        }
        if rx >= self.col_offset + cols {
            self.col_offset = rx - cols + 1;
        }
        if before != (self.row_offset, self.col_offset) {
            tracing::trace!(target: "model.view", row_offset = self.row_offset, col_offset = self.col_offset, "scrolled");
        }
    }

    /// Pull the cursor back inside the document (row first, then column).
    pub fn clamp_cursor(&mut self, doc: &Document) {
        if self.cursor.row > doc.len() {
            self.cursor.row = doc.len();
        }
        let len = doc.row_len(self.cursor.row);
        if self.cursor.col > len {
            self.cursor.col = len;
        }
    }

    pub fn cursor_is_valid(&self, doc: &Document) -> bool {
        self.cursor.row <= doc.len() && self.cursor.col <= doc.row_len(self.cursor.row)
    }

    /// Screen cell (x, y) of the cursor relative to the text area. Only
    /// meaningful after `scroll`.
    pub fn screen_cursor(&self, doc: &Document) -> (usize, usize) {
        let rx = self.render_col(doc);
        (
            rx.saturating_sub(self.col_offset),
            self.cursor.row.saturating_sub(self.row_offset),
        )
    }
}

/// The editor session's state plus its single view.
pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState, view: View) -> Self {
        Self { state, view }
    }
    pub fn state(&self) -> &EditorState {
        &self.state
    }
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }
    pub fn view(&self) -> &View {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Disjoint mutable borrows of the state and the view.
    pub fn split_state_and_view(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }

    /// Scroll the view against the current document.
    pub fn scroll(&mut self) {
        self.view.scroll(&self.state.document);
    }
}
