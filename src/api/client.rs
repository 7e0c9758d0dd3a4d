//! Core agent service client trait and errors

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::types::{CreateSessionRequest, CreateSessionResponse, HealthResponse, QueryRequest, QueryResponse, Tool};

/// The agent service contract - one method per endpoint
#[async_trait]
pub trait AgentApi: Send + Sync {
    /// `GET /tools`
    async fn list_tools(&self) -> Result<Vec<Tool>, ApiError>;

    /// `POST /sessions/create`
    async fn create_session(&self, request: CreateSessionRequest) -> Result<CreateSessionResponse, ApiError>;

    /// `POST /query`
    async fn query(&self, request: QueryRequest) -> Result<QueryResponse, ApiError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthResponse, ApiError>;
}

/// Errors that can occur talking to the agent service
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Transport-level failure (connect, timeout, reset)
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// HTTP status of a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidResponse(_) => None,
        }
    }
}

/// A call the mock received, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    ListTools,
    CreateSession(CreateSessionRequest),
    Query(QueryRequest),
    Health,
}

/// Scripted in-memory AgentApi for tests and offline runs.
///
/// Each endpoint has a queue of canned results; an empty queue answers with
/// a 500 so unexpected calls show up as failures.
#[derive(Default)]
pub struct MockAgentApi {
    tools: Mutex<VecDeque<Result<Vec<Tool>, ApiError>>>,
    sessions: Mutex<VecDeque<Result<CreateSessionResponse, ApiError>>>,
    answers: Mutex<VecDeque<Result<QueryResponse, ApiError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockAgentApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tools(self, tools: Vec<Tool>) -> Self {
        lock(&self.tools).push_back(Ok(tools));
        self
    }

    pub fn with_session(self, session_id: impl Into<String>) -> Self {
        lock(&self.sessions).push_back(Ok(CreateSessionResponse {
            session_id: session_id.into(),
        }));
        self
    }

    pub fn with_answer(self, response: impl Into<String>) -> Self {
        lock(&self.answers).push_back(Ok(QueryResponse {
            response: response.into(),
            session_id: None,
        }));
        self
    }

    pub fn with_answer_in_session(self, response: impl Into<String>, session_id: impl Into<String>) -> Self {
        lock(&self.answers).push_back(Ok(QueryResponse {
            response: response.into(),
            session_id: Some(session_id.into()),
        }));
        self
    }

    pub fn fail_tools(self, status: u16) -> Self {
        lock(&self.tools).push_back(Err(status_error(status)));
        self
    }

    pub fn fail_session(self, status: u16) -> Self {
        lock(&self.sessions).push_back(Err(status_error(status)));
        self
    }

    pub fn fail_query(self, status: u16) -> Self {
        lock(&self.answers).push_back(Err(status_error(status)));
        self
    }

    /// Every call received so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Query requests received so far
    pub fn queries(&self) -> Vec<QueryRequest> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                RecordedCall::Query(q) => Some(q),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: RecordedCall) {
        lock(&self.calls).push(call);
    }
}

#[async_trait]
impl AgentApi for MockAgentApi {
    async fn list_tools(&self) -> Result<Vec<Tool>, ApiError> {
        self.record(RecordedCall::ListTools);
        lock(&self.tools).pop_front().unwrap_or_else(|| Err(status_error(500)))
    }

    async fn create_session(&self, request: CreateSessionRequest) -> Result<CreateSessionResponse, ApiError> {
        self.record(RecordedCall::CreateSession(request));
        lock(&self.sessions).pop_front().unwrap_or_else(|| Err(status_error(500)))
    }

    async fn query(&self, request: QueryRequest) -> Result<QueryResponse, ApiError> {
        self.record(RecordedCall::Query(request));
        lock(&self.answers).pop_front().unwrap_or_else(|| Err(status_error(500)))
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.record(RecordedCall::Health);
        Ok(HealthResponse {
            status: "ok".to_string(),
        })
    }
}

fn status_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        body: "mock failure".to_string(),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
