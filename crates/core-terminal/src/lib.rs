//! Terminal transport: raw-mode lifecycle, blocking key reads, frame writes.
//!
//! Raw mode is process-wide state. `CrosstermBackend::enter` switches it on
//! (no echo, no canonical line buffering, no signal keys, no CR->NL input
//! translation, no output post-processing, 8-bit chars) and `leave` restores
//! the saved attributes. Restoration is guarded by a single global flag so it
//! happens exactly once however many paths ask for it: the RAII
//! `TerminalGuard`, the backend's own `Drop`, and `restore_terminal` called
//! from the panic hook.

use anyhow::{Context, Result};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind,
    KeyModifiers as CMods,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{Write, stdout};
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};

static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

pub trait TerminalBackend {
    /// Switch the terminal into raw mode.
    fn enter(&mut self) -> Result<()>;
    /// Restore the terminal attributes saved by `enter`. Idempotent.
    fn leave(&mut self) -> Result<()>;
    /// Block until one key event is available.
    fn read_key(&mut self) -> Result<KeyEvent>;
    /// Write a composed frame and flush it.
    fn write(&mut self, bytes: &[u8]) -> Result<()>;
    /// Terminal size as (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;
}

#[derive(Debug, Default)]
pub struct CrosstermBackend {
    _private: (),
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !RAW_MODE_ACTIVE.load(Ordering::SeqCst) {
            enable_raw_mode().context("enable raw mode")?;
            RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
            tracing::debug!(target: "terminal", "raw_mode_on");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
            disable_raw_mode().context("disable raw mode")?;
            tracing::debug!(target: "terminal", "raw_mode_off");
        }
        Ok(())
    }

    fn read_key(&mut self) -> Result<KeyEvent> {
        loop {
            match crossterm::event::read().context("read terminal event")? {
                CEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    return Ok(map_key(key));
                }
                _ => {}
            }
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut out = stdout().lock();
        out.write_all(bytes)?;
        out.flush()?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        crossterm::terminal::size().context("query terminal size")
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// Leave raw mode if it is still on. Safe to call from a panic hook and
/// redundant calls are no-ops.
pub fn restore_terminal() {
    if RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = disable_raw_mode();
    }
}

/// RAII guard owning a backend in raw mode; leaves raw mode on drop, so the
/// terminal is restored on every exit path including early returns and
/// unwinding panics.
pub struct TerminalGuard<B: TerminalBackend> {
    backend: B,
}

impl<B: TerminalBackend> TerminalGuard<B> {
    pub fn acquire(mut backend: B) -> Result<Self> {
        backend.enter()?;
        Ok(Self { backend })
    }
}

impl<B: TerminalBackend> Deref for TerminalGuard<B> {
    type Target = B;
    fn deref(&self) -> &B {
        &self.backend
    }
}

impl<B: TerminalBackend> DerefMut for TerminalGuard<B> {
    fn deref_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: TerminalBackend> TerminalBackend for TerminalGuard<B> {
    fn enter(&mut self) -> Result<()> {
        self.backend.enter()
    }
    fn leave(&mut self) -> Result<()> {
        self.backend.leave()
    }
    fn read_key(&mut self) -> Result<KeyEvent> {
        self.backend.read_key()
    }
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.backend.write(bytes)
    }
    fn size(&self) -> Result<(u16, u16)> {
        self.backend.size()
    }
}

impl<B: TerminalBackend> Drop for TerminalGuard<B> {
    fn drop(&mut self) {
        if let Err(e) = self.backend.leave() {
            tracing::error!(target: "terminal", ?e, "leave_failed");
        }
    }
}

/// Translate a crossterm key into the editor's vocabulary. Keys the editor
/// has no use for map to `KeyCode::Unknown`.
pub fn map_key(key: CKeyEvent) -> KeyEvent {
    let code = match key.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        CKeyCode::PageUp => KeyCode::PageUp,
        CKeyCode::PageDown => KeyCode::PageDown,
        other => {
            tracing::trace!(target: "terminal", code=?other, "unmapped_key");
            KeyCode::Unknown
        }
    };
    KeyEvent::new(code, map_mods(key.modifiers))
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}
