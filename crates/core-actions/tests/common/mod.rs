#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, dispatch_key};
use core_events::{KeyCode, KeyEvent};
use core_model::{EditorModel, Position, View};
use core_state::{Document, EditorState};

pub fn model_with(text: &str, viewport_rows: usize, viewport_cols: usize) -> EditorModel {
    EditorModel::new(
        EditorState::new(Document::from_text(text)),
        View::new(viewport_rows, viewport_cols),
    )
}

pub fn press(model: &mut EditorModel, code: KeyCode) -> DispatchResult {
    dispatch_key(&KeyEvent::plain(code), model)
}

pub fn type_text(model: &mut EditorModel, text: &str) {
    for ch in text.chars() {
        match ch {
            '\n' => press(model, KeyCode::Enter),
            c => press(model, KeyCode::Char(c)),
        };
    }
}

pub fn rows(model: &EditorModel) -> Vec<String> {
    model
        .state()
        .document
        .rows()
        .iter()
        .map(|r| r.chars().to_string())
        .collect()
}

pub fn cursor(model: &EditorModel) -> Position {
    model.view().cursor
}
