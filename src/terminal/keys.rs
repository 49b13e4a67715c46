//! Raw mode and key reading.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Guard that keeps raw mode enabled until dropped.
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Wait for a key press, enabling raw mode for the duration.
///
/// With a timeout, returns `Ok(None)` if nothing was pressed in time.
pub fn read_key(timeout: Option<Duration>) -> io::Result<Option<KeyEvent>> {
    let _guard = RawModeGuard::new()?;
    next_key(timeout)
}

/// Like [`read_key`], for callers already holding a [`RawModeGuard`].
/// Release and repeat events are skipped.
pub fn next_key(timeout: Option<Duration>) -> io::Result<Option<KeyEvent>> {
    loop {
        if let Some(timeout) = timeout
            && !event::poll(timeout)?
        {
            return Ok(None);
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(Some(key));
        }
    }
}

pub fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}
