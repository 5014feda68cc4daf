//! The tool invocation boundary.

use crate::tool::{ToolInvocation, ToolResult};

/// Boundary trait for performing (or simulating) a tool's side effect.
///
/// An executor receives one [`ToolInvocation`] and reports exactly one
/// [`ToolResult`]. Implementations must never let an error escape the
/// boundary: lookup failures and action failures alike are reported as
/// [`ToolResult::Failure`], with the underlying message captured verbatim.
/// The call may suspend on I/O; the dispatcher awaits it fully before
/// composing its response.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use voxroute_core::{Executor, ToolInvocation, ToolResult};
///
/// struct EchoExecutor;
///
/// #[async_trait]
/// impl Executor for EchoExecutor {
///     async fn execute(&self, invocation: &ToolInvocation) -> ToolResult {
///         ToolResult::success(format!("ran {}", invocation.tool_name))
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait Executor: Send + Sync {
    /// Run the named action and report its outcome.
    async fn execute(&self, invocation: &ToolInvocation) -> ToolResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingExecutor;

    #[async_trait::async_trait]
    impl Executor for FailingExecutor {
        async fn execute(&self, invocation: &ToolInvocation) -> ToolResult {
            ToolResult::failure(format!("Tool '{}' not found", invocation.tool_name))
        }
    }

    #[test]
    fn executor_failures_stay_inside_the_result() {
        let result = tokio_test::block_on(
            FailingExecutor.execute(&ToolInvocation::from_request("ghost", "hello")),
        );
        assert_eq!(result.error_message(), Some("Tool 'ghost' not found"));
    }
}
