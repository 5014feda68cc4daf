//! The dispatch orchestrator.
//!
//! [`Dispatcher`] maps free text to at most one tool via the rule table,
//! requests execution through the [`Executor`] boundary, and assembles the
//! structured response. Each dispatch is stateless and independent; the
//! only shared state is the immutable registry behind an `Arc`.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use voxroute_core::{DispatchError, DispatchResult, Executor, ToolInvocation};
use voxroute_tools::ToolRegistry;

use crate::rules::classify;

/// A dispatch request: the utterance, an opaque passthrough context, and an
/// optional tool allow-list (empty means all tools allowed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRequest {
    /// The raw utterance; must be non-empty.
    pub user_input: String,

    /// Opaque caller context, merged into the response context.
    #[serde(default)]
    pub context: Map<String, Value>,

    /// Tool names the caller permits; empty means no restriction.
    #[serde(default)]
    pub allowed_tools: Vec<String>,
}

impl DispatchRequest {
    /// Create a request with empty context and no allow-list.
    pub fn new(user_input: &str) -> Self {
        Self {
            user_input: user_input.to_string(),
            ..Self::default()
        }
    }

    /// Restrict the request to the given tools (builder pattern).
    pub fn with_allowed_tools(mut self, allowed_tools: Vec<String>) -> Self {
        self.allowed_tools = allowed_tools;
        self
    }

    /// Attach caller context (builder pattern).
    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = context;
        self
    }
}

/// The structured outcome of one dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResponse {
    /// Human-readable confirmation or fallback text.
    pub response: String,

    /// The request context merged with a server-set `timestamp` field.
    pub context: Map<String, Value>,

    /// Names of tools actually invoked, in invocation order. At most one
    /// element under the current classifier; the contract allows more.
    pub tools_used: Vec<String>,
}

/// Intent classifier and tool-dispatch orchestrator.
///
/// Collaborators are injected at construction so tests can substitute
/// doubles without process-wide state.
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
    executor: Arc<dyn Executor>,
}

impl Dispatcher {
    /// Create a dispatcher over a registry and an executor.
    pub fn new(registry: Arc<ToolRegistry>, executor: Arc<dyn Executor>) -> Self {
        Self { registry, executor }
    }

    /// The registry this dispatcher selects tools from.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Process one utterance end to end.
    ///
    /// Rejects empty input before any classification. Classification uses
    /// the fixed-priority rule table; a keyword match whose tool is excluded
    /// by the allow-list selects nothing rather than falling through to
    /// later rules. Execution failure is logged and deliberately does not
    /// alter the already-composed response text or the `tools_used` list.
    pub async fn process(&self, request: DispatchRequest) -> DispatchResult<DispatchResponse> {
        if request.user_input.is_empty() {
            return Err(DispatchError::invalid_request("userInput is required"));
        }

        let candidates = self.registry.candidates(&request.allowed_tools);
        let selected = classify(&request.user_input)
            .filter(|rule| candidates.iter().any(|def| def.name == rule.tool));

        let response = match selected {
            Some(rule) => format!(
                "I'll help you {}. Based on your request: \"{}\", I'll execute the {} tool.",
                rule.action_phrase, request.user_input, rule.tool,
            ),
            None => format!(
                "I understood your request: \"{}\". How can I help you with that?",
                request.user_input,
            ),
        };

        let mut tools_used = Vec::new();
        if let Some(rule) = selected {
            let invocation = ToolInvocation::from_request(rule.tool, &request.user_input);
            let result = self.executor.execute(&invocation).await;
            match result.error_message() {
                Some(error) => {
                    tracing::warn!(tool = rule.tool, error, "tool execution failed");
                }
                None => {
                    tracing::debug!(tool = rule.tool, "tool executed");
                }
            }
            tools_used.push(rule.tool.to_string());
        }

        let mut context = request.context;
        context.insert(
            "timestamp".to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );

        Ok(DispatchResponse {
            response,
            context,
            tools_used,
        })
    }
}
