//! Tool catalog - fetch the tools the agent service offers and turn them
//! into a selectable checklist.
//!
//! The checklist is plain data; the TUI and console printers render it.

pub mod checklist;

pub use checklist::{SelectableItem, ToolChecklist};

use log::{error, info};

use crate::api::{AgentApi, ApiError, Tool};

/// Fetch the catalog once.
///
/// Errors are returned to the caller; see [`load_checklist`] for the
/// forgiving startup path.
pub async fn fetch_tools(api: &dyn AgentApi) -> Result<Vec<Tool>, ApiError> {
    api.list_tools().await
}

/// Fetch the catalog and build a checklist from it.
///
/// A failed fetch is logged and yields an empty checklist.
pub async fn load_checklist(api: &dyn AgentApi) -> ToolChecklist {
    match fetch_tools(api).await {
        Ok(tools) => {
            info!("Loaded tool catalog with {} entries", tools.len());
            ToolChecklist::from_tools(tools)
        }
        Err(e) => {
            error!("Failed to load tool catalog: {}", e);
            ToolChecklist::default()
        }
    }
}
