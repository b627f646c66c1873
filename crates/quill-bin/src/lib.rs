//! Quill session: owns the editor model, the render engine and the terminal
//! backend, and runs the single-threaded render/read/dispatch loop.
//!
//! The only yield point is the blocking key read. A command that needs a
//! line of input (save-as, find) runs a nested prompt loop that re-renders
//! after every keystroke with the accumulator shown in the message bar.

use anyhow::Result;
use core_actions::io_ops::open_file;
use core_actions::{Prompt, PromptKind, PromptStep, dispatch, dispatch_key};
use core_config::{Config, ConfigContext};
use core_model::{EditorModel, View};
use core_render::RenderEngine;
use core_state::{Document, EditorState};
use core_terminal::TerminalBackend;
use std::path::Path;

pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

/// Build the initial model for a terminal of `columns` x `rows`, loading
/// `path` when given. A failed load keeps the file name so the first save
/// creates it.
pub fn bootstrap(path: Option<&Path>, columns: u16, rows: u16) -> EditorModel {
    let config = Config::default();
    let ctx = ConfigContext::from_terminal(&config, columns, rows);
    let mut state = EditorState::with_config(Document::new(), config);
    state.set_status(HELP_MESSAGE);
    if let Some(path) = path {
        open_file(&mut state, path);
    }
    let path_str = path.map(|p| p.display().to_string());
    tracing::info!(
        target: "runtime.startup",
        path = path_str.as_deref(),
        lines = state.document.len(),
        text_rows = ctx.text_rows(),
        text_columns = ctx.text_columns(),
        "bootstrap_complete"
    );
    EditorModel::new(state, View::new(ctx.text_rows(), ctx.text_columns()))
}

pub struct Session<B: TerminalBackend> {
    model: EditorModel,
    engine: RenderEngine,
    backend: B,
}

impl<B: TerminalBackend> Session<B> {
    pub fn new(model: EditorModel, backend: B) -> Self {
        Self {
            model,
            engine: RenderEngine::new(),
            backend,
        }
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run until a quit is confirmed. Transport errors end the loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.refresh()?;
            let key = self.backend.read_key()?;
            let result = dispatch_key(&key, &mut self.model);
            if result.quit {
                return self.finish();
            }
            if let Some(kind) = result.prompt {
                self.run_prompt(kind)?;
            }
        }
    }

    fn refresh(&mut self) -> Result<()> {
        self.engine.render(&mut self.model, &mut self.backend)
    }

    /// Nested input loop for commands that need a line of text. A submitted
    /// command may itself ask for input again.
    fn run_prompt(&mut self, kind: PromptKind) -> Result<()> {
        let mut next = Some(kind);
        while let Some(kind) = next.take() {
            tracing::debug!(target: "runtime.prompt", ?kind, "prompt_open");
            let mut prompt = Prompt::new(kind);
            loop {
                self.model.state_mut().set_status(prompt.label());
                self.refresh()?;
                let key = self.backend.read_key()?;
                match prompt.feed(&key) {
                    PromptStep::Continue => {}
                    PromptStep::Cancel => {
                        self.model.state_mut().set_status(kind.cancel_message());
                        tracing::debug!(target: "runtime.prompt", ?kind, "prompt_cancel");
                        break;
                    }
                    PromptStep::Submit(input) => {
                        self.model.state_mut().clear_status();
                        let result = dispatch(kind.into_action(input), &mut self.model);
                        next = result.prompt;
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.backend.write(&RenderEngine::clear_screen_frame()?)?;
        tracing::info!(target: "runtime", frames = self.engine.frames_rendered(), "shutdown");
        Ok(())
    }
}
