//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, key poller and chat
//! controller. It runs the main loop: render → read a key → process the
//! pending action → repeat.

use super::Tui;
use super::app::App;
use super::events::KeyPoller;
use super::state::{AppState, PendingAction};
use super::views::render;
use crate::error::ToolchatError;
use crate::session::ChatController;
use eyre::Result;
use log::info;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    app: App,
    keys: KeyPoller,
    controller: ChatController,
    /// Shown in the header
    server: String,
}

impl TuiRunner {
    pub fn new(terminal: Tui, controller: ChatController, server: impl Into<String>, tick_rate_ms: u64) -> Self {
        Self {
            terminal,
            app: App::new(),
            keys: KeyPoller::new(tick_rate_ms),
            controller,
            server: server.into(),
        }
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        self.app.state_mut().busy = Some("Loading tools...".to_string());
        self.draw()?;
        let count = self.controller.load_catalog().await;
        self.app.state_mut().busy = None;
        self.app.state_mut().clamp_cursor(count);
        info!("Checklist ready with {} tools", count);

        loop {
            self.draw()?;

            if let Some(key) = self.keys.next_key().await?
                && self.app.handle_key(key, self.controller.checklist_mut())
            {
                break;
            }

            self.process_pending_action().await?;

            if self.app.state().should_quit {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let state = self.app.state();
        let controller = &self.controller;
        let server = self.server.as_str();
        self.terminal.draw(|f| render(f, state, controller, server))?;
        Ok(())
    }

    async fn process_pending_action(&mut self) -> Result<()> {
        let Some(action) = self.app.state_mut().pending.take() else {
            return Ok(());
        };

        let busy = match &action {
            PendingAction::CreateSession => "Creating session...",
            PendingAction::SubmitQuery(_) => "Waiting for the agent...",
        };
        self.app.state_mut().busy = Some(busy.to_string());
        self.draw()?;

        apply_action(self.app.state_mut(), &mut self.controller, action).await;

        self.app.state_mut().busy = None;
        Ok(())
    }
}

/// Run one queued action against the controller and show the outcome.
///
/// A query that fails goes back into the input line.
async fn apply_action(state: &mut AppState, controller: &mut ChatController, action: PendingAction) {
    match action {
        PendingAction::CreateSession => {
            let created = controller.create_session().await.map(|s| s.session_id.clone());
            match created {
                Ok(session_id) => state.set_info(format!("Session {} created", session_id)),
                Err(e) => report(state, e),
            }
        }
        PendingAction::SubmitQuery(query) => match controller.send_query(&query).await {
            Ok(outcome) => match outcome.warning {
                Some(warning) => state.set_warning(warning.to_string()),
                None => state.status = None,
            },
            Err(e) => {
                state.input.restore(query);
                report(state, e);
            }
        },
    }
}

/// Validation problems go on the status line; request failures are
/// already logged and leave the status as it was.
fn report(state: &mut AppState, err: ToolchatError) {
    if let ToolchatError::Validation(v) = err {
        state.set_warning(v.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Tool;
    use crate::api::client::{MockAgentApi, RecordedCall};
    use crate::session::{MissingSessionPolicy, SessionContext};
    use crate::tui::state::{StatusLevel, StatusMessage};
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    async fn loaded(api: &Arc<MockAgentApi>, policy: MissingSessionPolicy) -> ChatController {
        let mut controller = ChatController::new(api.clone(), SessionContext::default(), policy);
        controller.load_catalog().await;
        controller
    }

    fn tools() -> Vec<Tool> {
        vec![Tool::new("search", "Web search"), Tool::new("IdeaAgent", "Ideas")]
    }

    fn screen(state: &AppState, controller: &ChatController) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| render(f, state, controller, "srv")).unwrap();
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[tokio::test]
    async fn test_empty_selection_warns_on_status_line() {
        let api = Arc::new(MockAgentApi::new().with_tools(tools()));
        let mut controller = loaded(&api, MissingSessionPolicy::Warn).await;
        let mut state = AppState::new();

        apply_action(&mut state, &mut controller, PendingAction::CreateSession).await;

        assert_eq!(
            state.status,
            Some(StatusMessage::warning("Select at least one tool before creating a session"))
        );
        assert_eq!(api.calls(), vec![RecordedCall::ListTools]);
        assert!(screen(&state, &controller).contains("Select at least one tool"));
    }

    #[tokio::test]
    async fn test_created_session_shows_in_header() {
        let api = Arc::new(MockAgentApi::new().with_tools(tools()).with_session("abc123"));
        let mut controller = loaded(&api, MissingSessionPolicy::Warn).await;
        controller.checklist_mut().toggle(0);
        let mut state = AppState::new();

        apply_action(&mut state, &mut controller, PendingAction::CreateSession).await;

        assert_eq!(state.status, Some(StatusMessage::info("Session abc123 created")));
        assert!(screen(&state, &controller).contains("session: abc123"));
    }

    #[tokio::test]
    async fn test_successful_query_clears_status() {
        let api = Arc::new(MockAgentApi::new().with_tools(tools()).with_session("abc123").with_answer("hello"));
        let mut controller = loaded(&api, MissingSessionPolicy::Warn).await;
        controller.checklist_mut().toggle(0);
        controller.create_session().await.unwrap();
        let mut state = AppState::new();
        state.set_warning("old warning");

        apply_action(&mut state, &mut controller, PendingAction::SubmitQuery("hi".to_string())).await;

        assert!(state.status.is_none());
        assert_eq!(state.input.content(), "");
        assert!(screen(&state, &controller).contains("hello"));
    }

    #[tokio::test]
    async fn test_failed_query_keeps_screen_and_input() {
        let api = Arc::new(
            MockAgentApi::new()
                .with_tools(tools())
                .with_session("abc123")
                .with_answer("kept")
                .fail_query(502),
        );
        let mut controller = loaded(&api, MissingSessionPolicy::Warn).await;
        controller.checklist_mut().toggle(0);
        controller.create_session().await.unwrap();
        controller.send_query("first").await.unwrap();
        let mut state = AppState::new();
        state.set_info("Session abc123 created");

        apply_action(&mut state, &mut controller, PendingAction::SubmitQuery("second".to_string())).await;

        assert_eq!(state.status, Some(StatusMessage::info("Session abc123 created")));
        assert_eq!(state.input.content(), "second");
        assert_eq!(controller.display().text(), "kept");
        assert!(screen(&state, &controller).contains("kept"));
    }

    #[tokio::test]
    async fn test_rejected_query_keeps_input() {
        let api = Arc::new(MockAgentApi::new().with_tools(tools()).with_answer("unused"));
        let mut controller = loaded(&api, MissingSessionPolicy::Reject).await;
        let mut state = AppState::new();

        apply_action(&mut state, &mut controller, PendingAction::SubmitQuery("hello?".to_string())).await;

        assert_eq!(state.status.as_ref().map(|s| s.level), Some(StatusLevel::Warning));
        assert_eq!(state.input.content(), "hello?");
        assert!(api.queries().is_empty());
    }

    #[tokio::test]
    async fn test_missing_session_warning_shown() {
        let api = Arc::new(MockAgentApi::new().with_tools(tools()).with_answer("hi"));
        let mut controller = loaded(&api, MissingSessionPolicy::Warn).await;
        let mut state = AppState::new();

        apply_action(&mut state, &mut controller, PendingAction::SubmitQuery("hello?".to_string())).await;

        assert_eq!(
            state.status,
            Some(StatusMessage::warning("Create a session before sending a query"))
        );
        assert_eq!(controller.display().text(), "hi");
    }
}
