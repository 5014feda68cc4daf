//! Registry-backed stub executor.
//!
//! Simulates each built-in action with a confirmation string instead of a
//! real third-party call. A production executor replaces these bodies with
//! actual service calls while keeping the same contract: one
//! [`ToolResult`] per invocation, and no error escapes the boundary.

use std::sync::Arc;

use serde_json::{Map, Value};
use voxroute_core::{Executor, ToolInvocation, ToolResult};

use crate::registry::ToolRegistry;

/// Executor that simulates all registered tools.
pub struct StubExecutor {
    registry: Arc<ToolRegistry>,
}

impl StubExecutor {
    /// Create a stub executor over the given registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }
}

/// Render an input field as display text.
///
/// Strings render bare, other values via their JSON form, and absent fields
/// render empty. The dispatcher currently sends only a `request` field, so
/// the schema-named placeholders below come out empty in practice; that
/// as-is behavior is kept until a field extraction step exists.
fn text_field(input: &Map<String, Value>, key: &str) -> String {
    match input.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[async_trait::async_trait]
impl Executor for StubExecutor {
    async fn execute(&self, invocation: &ToolInvocation) -> ToolResult {
        if let Err(err) = self.registry.get(&invocation.tool_name) {
            return ToolResult::failure(err.to_string());
        }

        let input = &invocation.input;
        let output = match invocation.tool_name.as_str() {
            "send_email" => format!(
                "Email sent to {} with subject \"{}\"",
                text_field(input, "to"),
                text_field(input, "subject"),
            ),
            "create_calendar_event" => format!(
                "Calendar event \"{}\" created for {}",
                text_field(input, "title"),
                text_field(input, "startTime"),
            ),
            "send_slack_message" => {
                format!("Message sent to {}", text_field(input, "channel"))
            }
            "create_github_issue" => {
                format!("GitHub issue created: {}", text_field(input, "title"))
            }
            "create_notion_page" => {
                format!("Notion page \"{}\" created", text_field(input, "title"))
            }
            other => {
                return ToolResult::failure(format!("Tool '{other}' not found"));
            }
        };

        tracing::debug!(tool = %invocation.tool_name, "stub execution complete");
        ToolResult::success(output)
    }
}
