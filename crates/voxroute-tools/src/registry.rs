//! In-memory tool registry.

use std::collections::HashMap;

use voxroute_core::{DispatchError, DispatchResult, ToolDefinition};

use crate::catalog::builtin_definitions;

/// Immutable catalogue of available tools with name-based lookup.
///
/// The registry is a pure read model after construction: definitions are
/// stored in registration order and answer listing, membership, and lookup
/// queries. It holds no behavior; action bodies live behind the
/// [`Executor`](voxroute_core::Executor) boundary.
///
/// # Example
///
/// ```rust
/// use voxroute_tools::ToolRegistry;
///
/// let registry = ToolRegistry::builtin();
/// assert!(registry.contains("send_email"));
/// assert!(registry.get("does_not_exist").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the fixed built-in catalogue.
    pub fn builtin() -> Self {
        builtin_definitions()
            .into_iter()
            .fold(Self::new(), |registry, def| registry.with_tool(def))
    }

    /// Add a definition using the builder pattern.
    ///
    /// Re-registering a name replaces the earlier definition in place,
    /// keeping its position in registration order.
    pub fn with_tool(mut self, definition: ToolDefinition) -> Self {
        match self.index.get(&definition.name) {
            Some(&position) => {
                self.tools[position] = definition;
            }
            None => {
                self.index
                    .insert(definition.name.clone(), self.tools.len());
                self.tools.push(definition);
            }
        }
        self
    }

    /// Return all registered definitions in registration order.
    ///
    /// The result is a defensive copy; callers cannot mutate registry state
    /// through it.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.tools.clone()
    }

    /// Look up a definition by exact name.
    pub fn get(&self, name: &str) -> DispatchResult<&ToolDefinition> {
        self.index
            .get(name)
            .map(|&position| &self.tools[position])
            .ok_or_else(|| DispatchError::tool_not_found(name))
    }

    /// Check whether a tool name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The candidate set for a dispatch: all definitions when `allowed` is
    /// empty, otherwise the definitions whose names appear in `allowed`.
    /// Order always follows registration order, never the allow-list.
    pub fn candidates(&self, allowed: &[String]) -> Vec<&ToolDefinition> {
        self.tools
            .iter()
            .filter(|def| allowed.is_empty() || allowed.contains(&def.name))
            .collect()
    }

    /// All registered tool names in registration order.
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|def| def.name.clone()).collect()
    }

    /// The number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxroute_core::{FieldType, InputSchema};

    #[test]
    fn builtin_registry_holds_five_tools() {
        let registry = ToolRegistry::builtin();
        assert_eq!(registry.len(), 5);
        assert!(!registry.is_empty());
    }

    #[test]
    fn get_finds_registered_tools_and_rejects_unknown_names() {
        let registry = ToolRegistry::builtin();

        let email = registry.get("send_email").unwrap();
        assert_eq!(email.description, "Send an email to a recipient");

        let missing = registry.get("does_not_exist");
        assert_eq!(
            missing.unwrap_err(),
            DispatchError::tool_not_found("does_not_exist")
        );
    }

    #[test]
    fn list_returns_a_defensive_copy() {
        let registry = ToolRegistry::builtin();

        let mut listed = registry.list();
        listed.clear();

        assert_eq!(registry.len(), 5);
        assert_eq!(registry.list().len(), 5);
    }

    #[test]
    fn candidates_with_empty_allow_list_means_all_tools() {
        let registry = ToolRegistry::builtin();
        let candidates = registry.candidates(&[]);
        assert_eq!(candidates.len(), 5);
    }

    #[test]
    fn candidates_follow_registry_order_not_allow_list_order() {
        let registry = ToolRegistry::builtin();
        let allowed = vec![
            "create_notion_page".to_string(),
            "send_email".to_string(),
        ];

        let names: Vec<&str> = registry
            .candidates(&allowed)
            .into_iter()
            .map(|def| def.name.as_str())
            .collect();

        assert_eq!(names, vec!["send_email", "create_notion_page"]);
    }

    #[test]
    fn candidates_ignore_unknown_allow_list_entries() {
        let registry = ToolRegistry::builtin();
        let allowed = vec!["no_such_tool".to_string(), "send_slack_message".to_string()];

        let names: Vec<&str> = registry
            .candidates(&allowed)
            .into_iter()
            .map(|def| def.name.as_str())
            .collect();

        assert_eq!(names, vec!["send_slack_message"]);
    }

    #[test]
    fn reregistering_a_name_replaces_in_place() {
        let registry = ToolRegistry::builtin().with_tool(ToolDefinition::new(
            "send_email",
            "Replacement definition",
            InputSchema::new().required_field("to", FieldType::String, "Recipient"),
        ));

        assert_eq!(registry.len(), 5);
        assert_eq!(registry.tool_names()[0], "send_email");
        assert_eq!(
            registry.get("send_email").unwrap().description,
            "Replacement definition"
        );
    }
}
