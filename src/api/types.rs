//! Wire types for the agent service JSON endpoints

use serde::{Deserialize, Serialize};

/// A named capability exposed by the agent service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique identifier, also what gets sent back when selected
    pub name: String,
    pub description: String,
}

impl Tool {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Body of `GET /tools`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsResponse {
    pub tools: Vec<Tool>,
}

/// Body of `POST /sessions/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub user_id: String,
    pub tool_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

/// Body of `POST /query`
///
/// `session_id` is serialized as `null` when absent; the service creates a
/// session of its own in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub user_id: String,
    pub query: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,

    /// Session the service answered in (not every server echoes it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tools_response_keeps_server_order() {
        let body = json!({
            "tools": [
                {"name": "search", "description": "Web search"},
                {"name": "IdeaAgent", "description": "Brainstorms ideas"},
            ]
        });
        let parsed: ToolsResponse = serde_json::from_value(body).unwrap();
        let names: Vec<&str> = parsed.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["search", "IdeaAgent"]);
    }

    #[test]
    fn test_query_request_serializes_null_session() {
        let req = QueryRequest {
            user_id: "default_user".to_string(),
            query: "hi".to_string(),
            session_id: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({"user_id": "default_user", "query": "hi", "session_id": null}));
    }

    #[test]
    fn test_query_response_without_session_id() {
        let parsed: QueryResponse = serde_json::from_value(json!({"response": "hello"})).unwrap();
        assert_eq!(parsed.response, "hello");
        assert!(parsed.session_id.is_none());
    }

    #[test]
    fn test_query_response_with_session_id() {
        let parsed: QueryResponse =
            serde_json::from_value(json!({"response": "hello", "session_id": "abc123"})).unwrap();
        assert_eq!(parsed.session_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_create_session_request_shape() {
        let req = CreateSessionRequest {
            user_id: "default_user".to_string(),
            tool_names: vec!["search".to_string()],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value, json!({"user_id": "default_user", "tool_names": ["search"]}));
    }

    #[test]
    fn test_health_is_ok() {
        assert!(HealthResponse { status: "ok".to_string() }.is_ok());
        assert!(!HealthResponse { status: "degraded".to_string() }.is_ok());
    }
}
