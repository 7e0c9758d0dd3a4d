//! Console rendering for the non-interactive subcommands

use colored::*;

use toolchat::catalog::SelectableItem;
use toolchat::session::Session;

/// One line per tool: checkbox, name, description
pub fn format_checklist(items: &[SelectableItem]) -> String {
    if items.is_empty() {
        return format!("{}", "No tools available".dimmed());
    }

    let width = items.iter().map(|i| i.name.len()).max().unwrap_or(0);
    items
        .iter()
        .map(|item| {
            let mark = if item.checked { "[x]" } else { "[ ]" };
            let name = format!("{:<width$}", item.name, width = width);
            format!("{} {}  {}", mark, name.bold(), item.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_session(session: &Session) -> String {
    format!(
        "{} {} (tools: {})",
        "Session:".green(),
        session.session_id,
        session.tool_names.join(", ")
    )
}

pub fn warn(message: impl std::fmt::Display) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}
