//! HTTP implementation of the agent service client
//!
//! Talks JSON to the agent service over reqwest. Any non-2xx status is a
//! failure; there are no retries.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::client::{AgentApi, ApiError};
use super::types::{
    CreateSessionRequest, CreateSessionResponse, HealthResponse, QueryRequest, QueryResponse, Tool, ToolsResponse,
};

/// Default agent service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpAgentConfig {
    pub base_url: String,
    /// `None` waits forever
    pub timeout: Option<Duration>,
}

impl Default for HttpAgentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl HttpAgentConfig {
    /// Create a new config pointing at a specific server
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Build from a millisecond timeout where 0 disables it
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout = (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms));
        self
    }
}

/// Agent service client over HTTP
pub struct HttpAgentApi {
    client: Client,
    base_url: String,
}

impl HttpAgentApi {
    /// Create a new client
    pub fn new(config: HttpAgentConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        debug!("GET {}", path);
        self.send(path, self.request(Method::GET, path)).await
    }

    async fn post<B: Serialize + Sync, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        debug!("POST {}", path);
        // .json() also sets Content-Type: application/json
        self.send(path, self.request(Method::POST, path).json(body)).await
    }

    async fn send<R: DeserializeOwned>(&self, path: &str, request: RequestBuilder) -> Result<R, ApiError> {
        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", path, e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("Reading response from {} failed: {}", path, e);
            ApiError::Network(e)
        })?;

        if !status.is_success() {
            error!("{} returned HTTP {}: {}", path, status.as_u16(), text);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            error!("{} returned an unexpected body: {}", path, e);
            ApiError::InvalidResponse(format!("{}: {}", path, e))
        })
    }
}

#[async_trait]
impl AgentApi for HttpAgentApi {
    async fn list_tools(&self) -> Result<Vec<Tool>, ApiError> {
        let body: ToolsResponse = self.get("/tools").await?;
        info!("Fetched {} tools", body.tools.len());
        Ok(body.tools)
    }

    async fn create_session(&self, request: CreateSessionRequest) -> Result<CreateSessionResponse, ApiError> {
        let created: CreateSessionResponse = self.post("/sessions/create", &request).await?;
        info!(
            "Created session {} for {} with tools {:?}",
            created.session_id, request.user_id, request.tool_names
        );
        Ok(created)
    }

    async fn query(&self, request: QueryRequest) -> Result<QueryResponse, ApiError> {
        let answer: QueryResponse = self.post("/query", &request).await?;
        info!("Received response of {} chars", answer.response.len());
        Ok(answer)
    }

    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.get("/health").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HttpAgentConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = HttpAgentConfig::default().with_timeout_ms(0);
        assert!(config.timeout.is_none());

        let config = HttpAgentConfig::default().with_timeout_ms(1500);
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let api = HttpAgentApi::new(HttpAgentConfig::with_base_url("http://agent.local:9000/")).unwrap();
        assert_eq!(api.base_url(), "http://agent.local:9000");
        assert_eq!(api.url("/tools"), "http://agent.local:9000/tools");
    }
}
