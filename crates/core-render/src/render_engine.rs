//! Full-frame composition.
//!
//! One frame per refresh cycle, built in a fixed order: hide cursor, home,
//! one line per viewport row, reverse-video status bar, message bar, cursor
//! placement, show cursor. Every line is cleared to end-of-line after its
//! content so no separate screen clear is needed. The frame is written to the
//! backend in a single call.

use crate::status::{StatusContext, build_message, build_status};
use crate::writer::Writer;
use anyhow::Result;
use core_model::{EditorModel, View};
use core_state::EditorState;
use core_terminal::TerminalBackend;
use std::time::Instant;

#[derive(Debug, Default)]
pub struct RenderEngine {
    frames: u64,
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Compose the escape-sequence buffer for the current state. `view` must
    /// already be scrolled so the cursor is inside the viewport.
    pub fn compose(&self, state: &EditorState, view: &View, now: Instant) -> Result<Vec<u8>> {
        let mut w = Writer::new();
        w.hide_cursor();
        w.move_to(0, 0);
        draw_rows(&mut w, state, view);
        draw_status_bar(&mut w, state, view);
        draw_message_bar(&mut w, state, view, now);
        let (x, y) = view.screen_cursor(&state.document);
        w.move_to(clamp_u16(x), clamp_u16(y));
        w.show_cursor();
        w.into_bytes()
    }

    /// Scroll, compose and write one frame.
    pub fn render<B: TerminalBackend>(
        &mut self,
        model: &mut EditorModel,
        backend: &mut B,
    ) -> Result<()> {
        let started = Instant::now();
        model.scroll();
        let frame = self.compose(model.state(), model.view(), started)?;
        backend.write(&frame)?;
        self.frames += 1;
        tracing::trace!(
            target: "render",
            frame = self.frames,
            bytes = frame.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "frame_written"
        );
        Ok(())
    }

    /// Buffer that clears the screen and homes the cursor, used on exit.
    pub fn clear_screen_frame() -> Result<Vec<u8>> {
        let mut w = Writer::new();
        w.clear_screen();
        w.move_to(0, 0);
        w.into_bytes()
    }
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

fn draw_rows(w: &mut Writer, state: &EditorState, view: &View) {
    let doc = &state.document;
    let cols = view.viewport_cols;
    for y in 0..view.viewport_rows {
        let file_row = y + view.row_offset;
        match doc.row(file_row) {
            Some(row) => {
                let visible: String = row
                    .render()
                    .chars()
                    .skip(view.col_offset)
                    .take(cols)
                    .collect();
                w.print(visible);
            }
            None if doc.is_empty() && y == view.viewport_rows / 3 => {
                w.print(welcome_line(&state.config.welcome, cols));
            }
            None => w.print("~"),
        }
        w.clear_to_eol();
        w.new_line();
    }
}

/// Banner centered in `cols`, with the filler tilde kept in column 0.
fn welcome_line(banner: &str, cols: usize) -> String {
    let text: String = banner.chars().take(cols).collect();
    let mut padding = (cols - text.chars().count()) / 2;
    let mut out = String::with_capacity(cols);
    if padding > 0 {
        out.push('~');
        padding -= 1;
    }
    out.extend(std::iter::repeat_n(' ', padding));
    out.push_str(&text);
    out
}

fn draw_status_bar(w: &mut Writer, state: &EditorState, view: &View) {
    let doc = &state.document;
    let ctx = StatusContext {
        file_name: doc.filename(),
        line_count: doc.len(),
        cursor_row: view.cursor.row,
        dirty: doc.is_dirty(),
    };
    w.reverse();
    w.print(build_status(&ctx, view.viewport_cols));
    w.reset_style();
    w.new_line();
}

fn draw_message_bar(w: &mut Writer, state: &EditorState, view: &View, now: Instant) {
    w.clear_to_eol();
    w.print(build_message(state.visible_status(now), view.viewport_cols));
}
