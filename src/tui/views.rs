//! TUI Views
//!
//! Header, tool checklist, response pane, query input and status line.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::colors;
use super::state::{AppState, Focus, StatusLevel};
use crate::catalog::SelectableItem;
use crate::session::ChatController;

/// Draw the whole screen.
pub fn render(frame: &mut Frame, state: &AppState, controller: &ChatController, server: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5), Constraint::Length(1)])
        .split(frame.area());

    render_header(frame, rows[0], controller, server);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[1]);

    render_tools(frame, columns[0], state, controller.checklist().items());

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(columns[1]);

    render_response(frame, right[0], controller);
    render_input(frame, right[1], state);
    render_status(frame, rows[2], state);
}

fn render_header(frame: &mut Frame, area: Rect, controller: &ChatController, server: &str) {
    let context = controller.context();
    let session = match context.session_id() {
        Some(id) => Span::styled(id.to_string(), Style::default().fg(colors::SESSION)),
        None => Span::styled("none", Style::default().fg(colors::DIM)),
    };

    let line = Line::from(vec![
        Span::styled(" toolchat ", Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::raw(server.to_string()),
        Span::raw(" │ user: "),
        Span::raw(context.user_id().to_string()),
        Span::raw(" │ session: "),
        session,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn focus_block(title: String, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(colors::FOCUS)
    } else {
        Style::default().fg(colors::DIM)
    };
    Block::default().borders(Borders::ALL).border_style(style).title(title)
}

fn format_item(item: &SelectableItem) -> ListItem<'static> {
    let mark = if item.checked { "[x] " } else { "[ ] " };
    let mark_style = if item.checked {
        Style::default().fg(colors::CHECKED)
    } else {
        Style::default()
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(mark, mark_style),
            Span::styled(item.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!("    {}", item.description),
            Style::default().fg(colors::DIM),
        )),
    ])
}

fn render_tools(frame: &mut Frame, area: Rect, state: &AppState, items: &[SelectableItem]) {
    let checked = items.iter().filter(|i| i.checked).count();
    let block = focus_block(format!(" Tools ({}/{}) ", checked, items.len()), state.focus == Focus::Tools);

    if items.is_empty() {
        let empty = Paragraph::new("No tools available").style(Style::default().fg(colors::DIM));
        frame.render_widget(empty.block(block), area);
        return;
    }

    let list = List::new(items.iter().map(format_item).collect::<Vec<_>>())
        .block(block)
        .highlight_style(Style::default().bg(colors::SELECTED).add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_response(frame: &mut Frame, area: Rect, controller: &ChatController) {
    let display = controller.display();
    let title = match display.updated_at() {
        Some(at) => format!(" Response ({}) ", at.format("%H:%M:%S")),
        None => " Response ".to_string(),
    };

    let body = Paragraph::new(display.text().to_string())
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(body, area);
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Query;
    let input = Paragraph::new(state.input.content().to_string()).block(focus_block(" Query ".to_string(), focused));
    frame.render_widget(input, area);

    if focused {
        frame.set_cursor_position(input_cursor(area, state.input.cursor_column()));
    }
}

/// Terminal cursor inside the query box, pinned to its last column on long input
fn input_cursor(area: Rect, column: usize) -> (u16, u16) {
    let column = u16::try_from(column).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(1).saturating_add(column);
    (x.min(area.right().saturating_sub(2)), area.y.saturating_add(1))
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if let Some(busy) = &state.busy {
        Line::from(Span::styled(format!(" {}", busy), Style::default().fg(colors::BUSY)))
    } else if let Some(status) = &state.status {
        let color = match status.level {
            StatusLevel::Info => colors::INFO,
            StatusLevel::Warning => colors::WARNING,
        };
        Line::from(Span::styled(format!(" {}", status.text), Style::default().fg(color)))
    } else {
        let hint = match state.focus {
            Focus::Tools => " ↑/↓ move  space toggle  n new session  tab query  q quit",
            Focus::Query => " enter send  esc tools  tab tools",
        };
        Line::from(Span::styled(hint, Style::default().fg(colors::KEYBIND)))
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Tool;
    use crate::api::client::MockAgentApi;
    use crate::session::{MissingSessionPolicy, SessionContext};
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
    }

    #[tokio::test]
    async fn test_render_checklist_and_response() {
        let api = Arc::new(
            MockAgentApi::new()
                .with_tools(vec![Tool::new("search", "Web search"), Tool::new("IdeaAgent", "Ideas")])
                .with_session("abc123")
                .with_answer("hello"),
        );
        let mut controller = ChatController::new(api, SessionContext::default(), MissingSessionPolicy::Warn);
        controller.load_catalog().await;
        controller.checklist_mut().toggle(0);
        controller.create_session().await.unwrap();
        controller.send_query("hi").await.unwrap();

        let state = AppState::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|f| render(f, &state, &controller, "http://localhost:8080"))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("[x] search"));
        assert!(text.contains("[ ] IdeaAgent"));
        assert!(text.contains("Web search"));
        assert!(text.contains("abc123"));
        assert!(text.contains("hello"));
    }

    #[tokio::test]
    async fn test_render_empty_catalog_and_warning() {
        let api = Arc::new(MockAgentApi::new().fail_tools(500));
        let mut controller = ChatController::new(api, SessionContext::default(), MissingSessionPolicy::Warn);
        controller.load_catalog().await;

        let mut state = AppState::new();
        state.set_warning("Select at least one tool");
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| render(f, &state, &controller, "srv")).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("No tools available"));
        assert!(text.contains("Select at least one tool"));
        assert!(text.contains("session: none"));
    }

    #[test]
    fn test_input_cursor_clamped() {
        let area = Rect::new(10, 20, 40, 3);
        assert_eq!(input_cursor(area, 0), (11, 21));
        assert_eq!(input_cursor(area, 5), (16, 21));
        assert_eq!(input_cursor(area, 100_000), (48, 21));
        assert_eq!(input_cursor(area, usize::MAX), (48, 21));
    }

    #[tokio::test]
    async fn test_render_long_query_does_not_panic() {
        let api = Arc::new(MockAgentApi::new());
        let controller = ChatController::new(api, SessionContext::default(), MissingSessionPolicy::Warn);
        let mut state = AppState::new();
        state.focus = Focus::Query;
        for _ in 0..70_000 {
            state.input.insert('x');
        }

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| render(f, &state, &controller, "srv")).unwrap();
        assert!(screen_text(&terminal).contains("xxxx"));
    }
}
