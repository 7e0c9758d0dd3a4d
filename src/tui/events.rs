//! Key input for the TUI.
//!
//! Only key presses matter to the runner; a poll that times out or sees
//! anything else (resize, mouse, key release) yields `None` so the loop
//! redraws and checks for pending work.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use eyre::Result;
use std::time::Duration;

/// Polls the terminal for key presses.
pub struct KeyPoller {
    tick_rate: Duration,
}

impl KeyPoller {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait up to one tick for a key press.
    pub async fn next_key(&self) -> Result<Option<KeyEvent>> {
        let tick_rate = self.tick_rate;

        // crossterm polling blocks, keep it off the runtime threads
        let key = tokio::task::spawn_blocking(move || -> Result<Option<KeyEvent>> {
            if event::poll(tick_rate)? {
                Ok(key_press(event::read()?))
            } else {
                Ok(None)
            }
        })
        .await??;

        Ok(key)
    }
}

/// Drop releases and repeats.
fn key_press(event: Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
        _ => None,
    }
}
