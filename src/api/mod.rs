//! Agent service API layer - wire types and HTTP client
//!
//! This module provides:
//! - Request/response types for the agent service endpoints
//! - AgentApi trait for transport abstraction
//! - HttpAgentApi implementation over reqwest

pub mod client;
pub mod http;
pub mod types;

pub use client::{AgentApi, ApiError};
pub use http::{HttpAgentApi, HttpAgentConfig};
pub use types::{
    CreateSessionRequest, CreateSessionResponse, HealthResponse, QueryRequest, QueryResponse, Tool, ToolsResponse,
};
