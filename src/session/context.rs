//! Explicit session context, constructed once at startup

use serde::{Deserialize, Serialize};

/// Default user id when none is configured
pub const DEFAULT_USER_ID: &str = "default_user";

/// A server-side conversation bound to a user and a tool selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
    /// Set semantics: no duplicates, first-selection order kept
    pub tool_names: Vec<String>,
}

impl Session {
    pub fn new(session_id: impl Into<String>, user_id: impl Into<String>, tool_names: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(tool_names.len());
        for name in tool_names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self {
            session_id: session_id.into(),
            user_id: user_id.into(),
            tool_names: unique,
        }
    }
}

/// What to do when a query is submitted with no session held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSessionPolicy {
    /// Warn, then send with a null session id and let the server decide
    #[default]
    Warn,
    /// Warn and send nothing
    Reject,
}

impl MissingSessionPolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "warn" => Some(Self::Warn),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Reject => "reject",
        }
    }
}

/// The user id and the one session currently held.
///
/// A new session replaces the old one outright; nothing ever clears it.
#[derive(Debug, Clone)]
pub struct SessionContext {
    user_id: String,
    current: Option<Session>,
}

impl SessionContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            current: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.session_id.as_str())
    }

    pub fn has_session(&self) -> bool {
        self.current.is_some()
    }

    /// Replace the held session outright
    pub fn set_session(&mut self, session: Session) -> &Session {
        self.current.insert(session)
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ID)
    }
}
