//! Single keypress sources for the "Press any key" pause
//!
//! On a terminal the pause reads one raw key event through crossterm.
//! When input is piped there is no terminal to put in raw mode, so one byte
//! of the input stream stands in for the key.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use log::debug;
use std::io::BufRead;

/// Something that can block until a single key is pressed
pub trait KeySource {
    /// Wait for one key. Returns `false` once no more keys can arrive.
    fn wait_for_key<I: BufRead>(&mut self, input: &mut I) -> Result<bool>;
}

/// Reads key events straight from the terminal in raw mode
#[derive(Debug, Default)]
pub struct TerminalKeys;

/// Restores cooked mode however the read ends
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl KeySource for TerminalKeys {
    fn wait_for_key<I: BufRead>(&mut self, _input: &mut I) -> Result<bool> {
        let _guard = RawModeGuard::enter()?;
        loop {
            match event::read().context("Failed to read key event")? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    debug!("Continue key: {:?}", key.code);
                    // Raw mode swallows SIGINT, so Ctrl+C has to end the loop here
                    let interrupted = key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(key.code, KeyCode::Char('c'));
                    return Ok(!interrupted);
                }
                _ => continue,
            }
        }
    }
}

/// Takes one byte of the input stream as the keypress
#[derive(Debug, Default)]
pub struct InputKeys;

impl KeySource for InputKeys {
    fn wait_for_key<I: BufRead>(&mut self, input: &mut I) -> Result<bool> {
        let buf = input.fill_buf().context("Failed to read from input")?;
        if buf.is_empty() {
            return Ok(false);
        }
        input.consume(1);
        Ok(true)
    }
}

/// Replays a fixed number of keypresses without touching the input
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    remaining: usize,
    pressed: usize,
}

impl ScriptedKeys {
    pub fn new(presses: usize) -> Self {
        Self {
            remaining: presses,
            pressed: 0,
        }
    }

    /// Keys handed out so far
    pub fn pressed(&self) -> usize {
        self.pressed
    }
}

impl KeySource for ScriptedKeys {
    fn wait_for_key<I: BufRead>(&mut self, _input: &mut I) -> Result<bool> {
        if self.remaining == 0 {
            return Ok(false);
        }
        self.remaining -= 1;
        self.pressed += 1;
        Ok(true)
    }
}
