//! Tool catalogue data model and execution contracts.
//!
//! A [`ToolDefinition`] describes an external action by name, description,
//! and declared input schema. Definitions are created once at startup and
//! never mutated afterwards. A [`ToolInvocation`] is the request to run one
//! of those actions, and a [`ToolResult`] is the structured outcome.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The declared type of a single schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Object,
}

/// A single named field in a tool's input schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as it appears in invocation input maps.
    pub name: String,

    /// Declared value type for the field.
    #[serde(rename = "type")]
    pub kind: FieldType,

    /// Human-readable description for tool listings.
    pub description: String,
}

impl FieldSpec {
    /// Create a new field specification.
    pub fn new(name: &str, kind: FieldType, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            description: description.to_string(),
        }
    }
}

/// Declared input shape for a tool.
///
/// Fields are kept in declaration order so catalogue listings are stable.
/// The required subset references field names and is validated only by the
/// (future) extraction layer; the current dispatcher sends a single
/// `request` field regardless of schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InputSchema {
    /// All declared fields in declaration order.
    pub fields: Vec<FieldSpec>,

    /// Names of fields that must be present in a well-formed invocation.
    pub required: Vec<String>,
}

impl InputSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an optional field using the builder pattern.
    pub fn field(mut self, name: &str, kind: FieldType, description: &str) -> Self {
        self.fields.push(FieldSpec::new(name, kind, description));
        self
    }

    /// Add a required field using the builder pattern.
    pub fn required_field(mut self, name: &str, kind: FieldType, description: &str) -> Self {
        self.fields.push(FieldSpec::new(name, kind, description));
        self.required.push(name.to_string());
        self
    }

    /// Check whether a field name belongs to the required subset.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// An immutable description of one external action.
///
/// Definitions are registered at process start from a fixed catalogue and
/// answer listing and lookup queries; they carry no behavior themselves.
/// The action body lives behind the [`Executor`](crate::Executor) boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Unique, stable identifier used for lookup and dispatch.
    pub name: String,

    /// Human-readable description for tool listings.
    pub description: String,

    /// Declared input shape.
    pub input_schema: InputSchema,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub fn new(name: &str, description: &str, input_schema: InputSchema) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// A request to run a specific tool with input data.
///
/// Created per dispatch, handed to the [`Executor`](crate::Executor), and
/// not retained afterwards. The input map keys are field names from the
/// tool's schema; the current dispatcher populates a single `request` field
/// carrying the raw utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    /// Name of the tool to run; must reference a registered definition.
    pub tool_name: String,

    /// Input values keyed by field name.
    pub input: Map<String, Value>,
}

impl ToolInvocation {
    /// Create a new invocation from a tool name and input map.
    pub fn new(tool_name: &str, input: Map<String, Value>) -> Self {
        Self {
            tool_name: tool_name.to_string(),
            input,
        }
    }

    /// Create an invocation whose input is the raw utterance under the
    /// `request` key. This is the shape the dispatcher produces today; no
    /// structured field extraction happens yet.
    pub fn from_request(tool_name: &str, user_input: &str) -> Self {
        let mut input = Map::new();
        input.insert("request".to_string(), Value::String(user_input.to_string()));
        Self::new(tool_name, input)
    }
}

/// The structured outcome of running a tool.
///
/// `ToolResult` is either success with an opaque result value or failure
/// with an error message. The two-variant shape makes an inconsistent
/// success/error combination unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResult {
    /// The action completed; `result` is an opaque value for the caller.
    Success { result: Value },

    /// The action failed; `error` carries the message verbatim.
    Failure { error: String },
}

impl ToolResult {
    /// Create a successful result.
    pub fn success(result: impl Into<Value>) -> Self {
        ToolResult::Success {
            result: result.into(),
        }
    }

    /// Create a failed result.
    pub fn failure(error: impl Into<String>) -> Self {
        ToolResult::Failure {
            error: error.into(),
        }
    }

    /// Check if the execution succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, ToolResult::Success { .. })
    }

    /// Check if the execution failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, ToolResult::Failure { .. })
    }

    /// Get the result value if successful.
    pub fn result(&self) -> Option<&Value> {
        match self {
            ToolResult::Success { result } => Some(result),
            ToolResult::Failure { .. } => None,
        }
    }

    /// Get the error message if failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ToolResult::Success { .. } => None,
            ToolResult::Failure { error } => Some(error),
        }
    }

    /// Convert to a `Result` for `?`-style handling.
    pub fn into_result(self) -> Result<Value, String> {
        match self {
            ToolResult::Success { result } => Ok(result),
            ToolResult::Failure { error } => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_builder_tracks_required_subset() {
        let schema = InputSchema::new()
            .required_field("to", FieldType::String, "Recipient address")
            .required_field("subject", FieldType::String, "Subject line")
            .field("cc", FieldType::String, "Optional carbon copy");

        assert_eq!(schema.fields.len(), 3);
        assert_eq!(schema.required, vec!["to", "subject"]);
        assert!(schema.is_required("to"));
        assert!(!schema.is_required("cc"));
    }

    #[test]
    fn schema_fields_keep_declaration_order() {
        let schema = InputSchema::new()
            .required_field("title", FieldType::String, "Title")
            .field("properties", FieldType::Object, "Extra properties");

        let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["title", "properties"]);
    }

    #[test]
    fn definition_serializes_with_camel_case_schema_key() {
        let def = ToolDefinition::new(
            "send_email",
            "Send an email",
            InputSchema::new().required_field("to", FieldType::String, "Recipient"),
        );

        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["name"], "send_email");
        assert!(json.get("inputSchema").is_some());
        assert_eq!(json["inputSchema"]["fields"][0]["type"], "string");
    }

    #[test]
    fn invocation_from_request_wraps_raw_utterance() {
        let invocation = ToolInvocation::from_request("send_email", "email Bob");

        assert_eq!(invocation.tool_name, "send_email");
        assert_eq!(invocation.input.get("request").unwrap(), "email Bob");
        assert_eq!(invocation.input.len(), 1);
    }

    #[test]
    fn result_accessors_are_mutually_exclusive() {
        let ok = ToolResult::success("done");
        assert!(ok.is_success());
        assert_eq!(ok.result(), Some(&Value::String("done".to_string())));
        assert_eq!(ok.error_message(), None);

        let failed = ToolResult::failure("boom");
        assert!(failed.is_failure());
        assert_eq!(failed.result(), None);
        assert_eq!(failed.error_message(), Some("boom"));
    }

    #[test]
    fn result_converts_to_std_result() {
        assert_eq!(
            ToolResult::success(42).into_result(),
            Ok(Value::Number(42.into()))
        );
        assert_eq!(
            ToolResult::failure("nope").into_result(),
            Err("nope".to_string())
        );
    }
}
