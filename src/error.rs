//! Error types for toolchat
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

pub use crate::api::ApiError;

/// Client-side checks that stop an action before (or instead of) a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Session creation was triggered with nothing checked
    #[error("Select at least one tool before creating a session")]
    EmptyToolSelection,

    /// Query text was empty or whitespace
    #[error("Enter a query before sending")]
    EmptyQuery,

    /// No session is held and the policy forbids sending without one
    #[error("Create a session before sending a query")]
    MissingSession,
}

/// All error types that can occur in toolchat
#[derive(Debug, Error)]
pub enum ToolchatError {
    /// Request to the agent service failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Input rejected before any request was made
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for toolchat operations
pub type Result<T> = std::result::Result<T, ToolchatError>;
