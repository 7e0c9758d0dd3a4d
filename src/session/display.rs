//! The chat display: one response at a time, no history

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct ChatDisplay {
    text: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

impl ChatDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever was shown with `text`
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
        self.updated_at = Some(Utc::now());
    }

    /// Current text, empty if nothing has been shown yet
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
