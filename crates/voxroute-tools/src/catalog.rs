//! The fixed built-in tool catalogue.
//!
//! Five stubbed external actions, defined once at process start. Field
//! declarations and required subsets follow the upstream service contracts
//! they stand in for; nothing here is mutated or extended at runtime.

use voxroute_core::{FieldType, InputSchema, ToolDefinition};

/// Build the fixed catalogue of built-in tool definitions, in registration
/// order.
pub fn builtin_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "send_email",
            "Send an email to a recipient",
            InputSchema::new()
                .required_field("to", FieldType::String, "Recipient email address")
                .required_field("subject", FieldType::String, "Email subject line")
                .required_field("body", FieldType::String, "Email body text"),
        ),
        ToolDefinition::new(
            "create_calendar_event",
            "Create a calendar event",
            InputSchema::new()
                .required_field("title", FieldType::String, "Event title")
                .required_field("startTime", FieldType::String, "Event start time")
                .required_field("endTime", FieldType::String, "Event end time")
                .field("description", FieldType::String, "Event description"),
        ),
        ToolDefinition::new(
            "send_slack_message",
            "Send a message to a Slack channel",
            InputSchema::new()
                .required_field("channel", FieldType::String, "Target Slack channel")
                .required_field("message", FieldType::String, "Message text"),
        ),
        ToolDefinition::new(
            "create_github_issue",
            "Create a GitHub issue",
            InputSchema::new()
                .required_field("owner", FieldType::String, "Repository owner")
                .required_field("repo", FieldType::String, "Repository name")
                .required_field("title", FieldType::String, "Issue title")
                .field("body", FieldType::String, "Issue body text"),
        ),
        ToolDefinition::new(
            "create_notion_page",
            "Create a page in a Notion database",
            InputSchema::new()
                .required_field("databaseId", FieldType::String, "Target database ID")
                .required_field("title", FieldType::String, "Page title")
                .field("properties", FieldType::Object, "Additional page properties"),
        ),
    ]
}
