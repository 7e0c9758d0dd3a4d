//! Application state for the TUI.
//!
//! - `AppState`: All mutable UI state (the session itself lives in the controller)
//! - `Focus`: Which pane receives keys
//! - `PendingAction`: Work queued by key handling for the runner to perform

use super::input::TextInput;

#[derive(Debug, Default)]
pub struct AppState {
    /// Pane receiving keyboard input
    pub focus: Focus,
    /// Highlighted row in the tool checklist
    pub cursor: usize,
    /// Query being typed
    pub input: TextInput,
    /// Last warning or notice shown on the status line
    pub status: Option<StatusMessage>,
    /// Shown while a request is in flight
    pub busy: Option<String>,
    /// Action for the runner to process after this key
    pub pending: Option<PendingAction>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_warning(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::warning(text));
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage::info(text));
    }

    /// Keep the cursor inside a checklist of `len` rows
    pub fn clamp_cursor(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Tools,
    Query,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Tools => Focus::Query,
            Focus::Query => Focus::Tools,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Create a session from the checked tools
    CreateSession,
    /// Send a query in the current session
    SubmitQuery(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::Tools.next(), Focus::Query);
        assert_eq!(Focus::Query.next(), Focus::Tools);
    }

    #[test]
    fn test_app_state_default() {
        let state = AppState::new();
        assert_eq!(state.focus, Focus::Tools);
        assert_eq!(state.cursor, 0);
        assert!(state.status.is_none());
        assert!(state.pending.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_clamp_cursor() {
        let mut state = AppState::new();
        state.cursor = 5;
        state.clamp_cursor(3);
        assert_eq!(state.cursor, 2);
        state.clamp_cursor(0);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_status_levels() {
        let mut state = AppState::new();
        state.set_warning("careful");
        assert_eq!(state.status, Some(StatusMessage::warning("careful")));
        state.set_info("done");
        assert_eq!(state.status.as_ref().map(|s| s.level), Some(StatusLevel::Info));
    }
}
