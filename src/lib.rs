//! toolchat - pick agent tools, open a session and chat with a hosted agent
//!
//! The agent service exposes a tool catalog, session creation and a query
//! endpoint. This crate wraps them in a typed client, keeps the current
//! session in an explicit context, and ships a terminal UI on top.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod tui;

pub use error::{Result, ToolchatError, ValidationError};
