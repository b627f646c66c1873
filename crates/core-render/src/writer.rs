//! Terminal writer: an ordered list of primitive terminal operations turned
//! into one escape-sequence buffer.
//!
//! Invariants:
//! * Commands preserve ordering; nothing is emitted until `into_bytes`.
//! * Positions are absolute with a (0,0) origin; callers keep them in bounds.
//! * The writer owns no global state; it lives for a single frame.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HideCursor,
    ShowCursor,
    MoveTo(u16, u16),
    ClearToEol,
    ClearScreen,
    Print(String),
    Reverse,
    ResetStyle,
    /// Raw mode disables output post-processing, so a line break is `\r\n`.
    NewLine,
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn hide_cursor(&mut self) {
        self.cmds.push(Command::HideCursor);
    }
    pub fn show_cursor(&mut self) {
        self.cmds.push(Command::ShowCursor);
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn clear_to_eol(&mut self) {
        self.cmds.push(Command::ClearToEol);
    }
    pub fn clear_screen(&mut self) {
        self.cmds.push(Command::ClearScreen);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }
    pub fn reverse(&mut self) {
        self.cmds.push(Command::Reverse);
    }
    pub fn reset_style(&mut self) {
        self.cmds.push(Command::ResetStyle);
    }
    pub fn new_line(&mut self) {
        self.cmds.push(Command::NewLine);
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    /// Encode every queued command into a single byte buffer.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let mut out: Vec<u8> = Vec::with_capacity(self.cmds.len() * 8);
        for c in self.cmds {
            match c {
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::ClearToEol => queue!(out, Clear(ClearType::UntilNewLine))?,
                Command::ClearScreen => queue!(out, Clear(ClearType::All))?,
                Command::Print(s) => queue!(out, Print(s))?,
                Command::Reverse => queue!(out, SetAttribute(Attribute::Reverse))?,
                Command::ResetStyle => queue!(out, SetAttribute(Attribute::Reset))?,
                Command::NewLine => out.extend_from_slice(b"\r\n"),
            }
        }
        Ok(out)
    }
}
