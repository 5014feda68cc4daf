//! Error types for dispatch operations.
//!
//! Only two error kinds cross API boundaries as `Err` values: rejected
//! requests and failed registry lookups. Execution failures never surface
//! here; they are captured into
//! [`ToolResult::Failure`](crate::tool::ToolResult) by the executor.

/// Errors surfaced by the dispatch pipeline and registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The request was malformed; `userInput` was missing or empty.
    /// Terminal, surfaced to the caller before any classification.
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// The named tool is absent from the registry.
    #[error("Tool '{name}' not found")]
    ToolNotFound { name: String },
}

impl DispatchError {
    /// Build an `InvalidRequest` error from a reason string.
    pub fn invalid_request(reason: &str) -> Self {
        DispatchError::InvalidRequest {
            reason: reason.to_string(),
        }
    }

    /// Build a `ToolNotFound` error for the given tool name.
    pub fn tool_not_found(name: &str) -> Self {
        DispatchError::ToolNotFound {
            name: name.to_string(),
        }
    }
}

/// Convenience alias for results carrying a [`DispatchError`].
pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_not_found_message_names_the_tool() {
        let err = DispatchError::tool_not_found("does_not_exist");
        assert_eq!(err.to_string(), "Tool 'does_not_exist' not found");
    }

    #[test]
    fn invalid_request_message_carries_reason() {
        let err = DispatchError::invalid_request("userInput is required");
        assert_eq!(err.to_string(), "invalid request: userInput is required");
    }
}
