//! Chat controller - catalog, session creation and queries in one place
//!
//! Every mutating operation takes `&mut self`, so one controller runs at
//! most one action at a time.

use std::sync::Arc;

use log::{debug, error, info, warn};

use super::context::{MissingSessionPolicy, Session, SessionContext};
use super::display::ChatDisplay;
use crate::api::{AgentApi, CreateSessionRequest, QueryRequest};
use crate::catalog::{self, ToolChecklist};
use crate::error::{Result, ValidationError};

/// Result of a successful query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    /// Text now shown in the chat display
    pub response: String,
    /// Raised but not fatal (missing session under the warn policy)
    pub warning: Option<ValidationError>,
    /// The server's session id was taken as the current session
    pub adopted_session: bool,
}

pub struct ChatController {
    api: Arc<dyn AgentApi>,
    checklist: ToolChecklist,
    context: SessionContext,
    display: ChatDisplay,
    policy: MissingSessionPolicy,
}

impl ChatController {
    pub fn new(api: Arc<dyn AgentApi>, context: SessionContext, policy: MissingSessionPolicy) -> Self {
        Self {
            api,
            checklist: ToolChecklist::default(),
            context,
            display: ChatDisplay::new(),
            policy,
        }
    }

    pub fn checklist(&self) -> &ToolChecklist {
        &self.checklist
    }

    pub fn checklist_mut(&mut self) -> &mut ToolChecklist {
        &mut self.checklist
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn display(&self) -> &ChatDisplay {
        &self.display
    }

    pub fn policy(&self) -> MissingSessionPolicy {
        self.policy
    }

    /// Fetch the catalog into the checklist; returns the number of tools.
    ///
    /// A failed fetch leaves the checklist empty.
    pub async fn load_catalog(&mut self) -> usize {
        self.checklist = catalog::load_checklist(self.api.as_ref()).await;
        self.checklist.len()
    }

    /// Fetch the catalog into the checklist, returning a failed fetch.
    ///
    /// On failure the checklist is left as it was.
    pub async fn fetch_catalog(&mut self) -> Result<usize> {
        let tools = catalog::fetch_tools(self.api.as_ref()).await?;
        self.checklist = ToolChecklist::from_tools(tools);
        Ok(self.checklist.len())
    }

    /// Create a session from the tools checked right now.
    ///
    /// On failure the previously held session (if any) stays in place.
    pub async fn create_session(&mut self) -> Result<&Session> {
        let tool_names = self.checklist.selected_names();
        if tool_names.is_empty() {
            warn!("Session creation requested with no tools selected");
            return Err(ValidationError::EmptyToolSelection.into());
        }

        let request = CreateSessionRequest {
            user_id: self.context.user_id().to_string(),
            tool_names: tool_names.clone(),
        };

        let created = match self.api.create_session(request).await {
            Ok(created) => created,
            Err(e) => {
                error!("Session creation failed: {}", e);
                if let Some(previous) = self.context.session_id() {
                    warn!("Keeping previous session {}", previous);
                }
                return Err(e.into());
            }
        };

        let session = Session::new(created.session_id, self.context.user_id(), tool_names);
        info!("Session {} ready with tools {:?}", session.session_id, session.tool_names);
        if let Some(previous) = self.context.session_id() {
            debug!("Replacing session {}", previous);
        }

        Ok(self.context.set_session(session))
    }

    /// Send `query` in the current session and show the answer.
    pub async fn send_query(&mut self, query: &str) -> Result<QueryOutcome> {
        if query.trim().is_empty() {
            warn!("Empty query not sent");
            return Err(ValidationError::EmptyQuery.into());
        }

        let mut warning = None;
        if !self.context.has_session() {
            warn!("Query submitted without a session (policy: {})", self.policy.as_str());
            match self.policy {
                MissingSessionPolicy::Reject => return Err(ValidationError::MissingSession.into()),
                MissingSessionPolicy::Warn => warning = Some(ValidationError::MissingSession),
            }
        }

        let request = QueryRequest {
            user_id: self.context.user_id().to_string(),
            query: query.to_string(),
            session_id: self.context.session_id().map(str::to_string),
        };

        let answer = match self.api.query(request).await {
            Ok(answer) => answer,
            Err(e) => {
                error!("Query failed: {}", e);
                return Err(e.into());
            }
        };

        self.display.replace(answer.response.clone());

        let mut adopted_session = false;
        let held = self.context.session_id().map(str::to_string);
        match (held, answer.session_id) {
            (None, Some(server_id)) => {
                info!("Adopting server-created session {}", server_id);
                let session = Session::new(server_id, self.context.user_id(), Vec::new());
                self.context.set_session(session);
                adopted_session = true;
            }
            (Some(held), Some(server_id)) if held != server_id => {
                warn!("Server answered in session {} but {} is held", server_id, held);
            }
            _ => {}
        }

        Ok(QueryOutcome {
            response: answer.response,
            warning,
            adopted_session,
        })
    }
}
