//! # Voxroute Core
//!
//! Core types and contracts for the voxroute voice command dispatcher.
//! This crate defines the tool catalogue data model, the invocation and
//! result contracts, and the [`Executor`] boundary through which selected
//! tools are actually run.

pub mod error;
pub mod executor;
pub mod tool;

pub use error::{DispatchError, DispatchResult};
pub use executor::Executor;
pub use tool::{FieldSpec, FieldType, InputSchema, ToolDefinition, ToolInvocation, ToolResult};
