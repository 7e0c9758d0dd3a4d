//! TUI Application
//!
//! Turns key presses into state changes and pending actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, Focus, PendingAction};
use crate::catalog::ToolChecklist;

/// Key handling over the UI state
#[derive(Debug, Default)]
pub struct App {
    state: AppState,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key press; returns true when the app should quit.
    ///
    /// Checklist toggles are applied directly; network work is queued
    /// in `state.pending`.
    pub fn handle_key(&mut self, key: KeyEvent, checklist: &mut ToolChecklist) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return true;
        }

        if key.code == KeyCode::Tab {
            self.state.focus = self.state.focus.next();
            return false;
        }

        match self.state.focus {
            Focus::Tools => self.handle_tools_key(key, checklist),
            Focus::Query => self.handle_query_key(key),
        }

        self.state.should_quit
    }

    fn handle_tools_key(&mut self, key: KeyEvent, checklist: &mut ToolChecklist) {
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.cursor = self.state.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.state.cursor + 1 < checklist.len() {
                    self.state.cursor += 1;
                }
            }
            KeyCode::Char(' ') => {
                checklist.toggle(self.state.cursor);
            }
            KeyCode::Char('n') | KeyCode::Enter => {
                self.state.pending = Some(PendingAction::CreateSession);
            }
            KeyCode::Char('i') | KeyCode::Char('/') => {
                self.state.focus = Focus::Query;
            }
            _ => {}
        }
    }

    fn handle_query_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.focus = Focus::Tools,
            KeyCode::Enter => {
                let query = self.state.input.take();
                self.state.pending = Some(PendingAction::SubmitQuery(query));
            }
            _ => {
                self.state.input.handle_key(&key);
            }
        }
    }
}
