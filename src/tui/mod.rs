//! Terminal User Interface for toolchat.
//!
//! One screen with two focusable panes:
//! - **Tools**: checklist of the catalog, session creation
//! - **Query**: input line; the single current response is shown above it

mod app;
mod events;
mod input;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::KeyPoller;
pub use input::TextInput;
pub use runner::TuiRunner;
pub use state::{AppState, Focus, PendingAction, StatusLevel, StatusMessage};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Palette, k9s flavored.
pub mod colors {
    use ratatui::style::Color;

    pub const HEADER: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SESSION: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const CHECKED: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const FOCUS: Color = Color::Rgb(255, 215, 0); // Gold
    pub const BUSY: Color = Color::Rgb(255, 215, 0); // Gold
    pub const INFO: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const WARNING: Color = Color::Rgb(255, 255, 0); // Yellow
    pub const SELECTED: Color = Color::DarkGray;
    pub const DIM: Color = Color::DarkGray;
}
