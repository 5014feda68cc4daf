//! Wire types for the HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use voxroute_core::ToolDefinition;
use voxroute_dispatch::DispatchRequest;

/// Body of `POST /command`.
///
/// `userInput` defaults to empty when absent so the dispatcher's own
/// validation produces the 400, matching the contract for missing input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    #[serde(default)]
    pub user_input: String,

    #[serde(default)]
    pub context: Map<String, Value>,

    /// Tool allow-list; absent or empty means all tools.
    #[serde(default)]
    pub tools: Vec<String>,
}

impl From<CommandRequest> for DispatchRequest {
    fn from(request: CommandRequest) -> Self {
        DispatchRequest {
            user_input: request.user_input,
            context: request.context,
            allowed_tools: request.tools,
        }
    }
}

/// Body of `GET /tools` responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolDefinition>,
}

/// Query parameters for `GET /tools`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolListQuery {
    /// Optional comma-separated tool name filter.
    pub tools: Option<String>,
}

/// Body of `GET /health` responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_request_defaults_missing_fields() {
        let request: CommandRequest =
            serde_json::from_str(r#"{"userInput": "hello"}"#).unwrap();

        assert_eq!(request.user_input, "hello");
        assert!(request.context.is_empty());
        assert!(request.tools.is_empty());
    }

    #[test]
    fn command_request_tolerates_missing_user_input() {
        let request: CommandRequest = serde_json::from_str("{}").unwrap();
        assert!(request.user_input.is_empty());
    }

    #[test]
    fn command_request_maps_tools_to_allow_list() {
        let request: CommandRequest = serde_json::from_str(
            r#"{"userInput": "hi", "tools": ["send_email"], "context": {"k": 1}}"#,
        )
        .unwrap();

        let dispatch: DispatchRequest = request.into();
        assert_eq!(dispatch.allowed_tools, vec!["send_email"]);
        assert_eq!(dispatch.context.get("k").unwrap(), 1);
    }
}
