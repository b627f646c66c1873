//! File IO helpers shared by the dispatcher and session startup.
//!
//! Synchronous and minimal. Every outcome, success or failure, ends up as a
//! message in the message bar; none of these failures are fatal.

use core_state::{DocumentError, EditorState};
use std::path::{Path, PathBuf};

/// Result of a write attempt.
#[derive(Debug)]
pub enum WriteFileResult {
    Success { lines: usize },
    NoFilename,
    Error,
}

/// Load `path` into the state's document, reporting failures in the message
/// bar. Returns true when the file was read.
pub fn open_file(state: &mut EditorState, path: &Path) -> bool {
    match state.document.load(path) {
        Ok(lines) => {
            tracing::info!(target: "io", file=%path.display(), lines, "opened");
            true
        }
        Err(e) => {
            state.set_status(e.to_string());
            false
        }
    }
}

/// Serialize the document to `target` (adopting it as the file name) or to
/// the current file name.
pub fn write_file(state: &mut EditorState, target: Option<PathBuf>) -> WriteFileResult {
    let result = match target {
        Some(path) => state.document.save_as(path),
        None => state.document.save(),
    };
    match result {
        Ok(lines) => {
            let name = display_name(state);
            state.set_status(format!("{lines} lines written to {name}"));
            WriteFileResult::Success { lines }
        }
        Err(DocumentError::NoFilename) => WriteFileResult::NoFilename,
        Err(e) => {
            state.set_status(format!("Save failed: {e}"));
            WriteFileResult::Error
        }
    }
}

/// File name for the status bar, or the unsaved placeholder.
pub fn display_name(state: &EditorState) -> String {
    state
        .document
        .filename()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "[No Name]".to_string())
}
