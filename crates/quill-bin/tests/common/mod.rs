#![allow(dead_code)]

use anyhow::{Result, bail};
use core_events::{KeyCode, KeyEvent};
use core_terminal::TerminalBackend;
use std::collections::VecDeque;

/// Backend fed from a fixed key script; every write is captured. Running
/// out of keys is reported as a transport error.
#[derive(Default)]
pub struct ScriptedBackend {
    keys: VecDeque<KeyEvent>,
    pub writes: Vec<Vec<u8>>,
    pub entered: bool,
}

impl ScriptedBackend {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> Vec<String> {
        self.writes
            .iter()
            .map(|w| String::from_utf8_lossy(w).into_owned())
            .collect()
    }

    pub fn last_frame(&self) -> String {
        self.frames().pop().unwrap_or_default()
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }
}

impl TerminalBackend for ScriptedBackend {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }
    fn leave(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }
    fn read_key(&mut self) -> Result<KeyEvent> {
        match self.keys.pop_front() {
            Some(k) => Ok(k),
            None => bail!("key script exhausted"),
        }
    }
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writes.push(bytes.to_vec());
        Ok(())
    }
    fn size(&self) -> Result<(u16, u16)> {
        Ok((80, 24))
    }
}

pub fn text(s: &str) -> Vec<KeyEvent> {
    s.chars()
        .map(|c| match c {
            '\n' => KeyEvent::plain(KeyCode::Enter),
            c => KeyEvent::plain(KeyCode::Char(c)),
        })
        .collect()
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::plain(code)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::ctrl(c)
}

pub const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[1;1H";
