//! # Voxroute Tools
//!
//! Tool registry and stub executors for the voxroute voice command
//! dispatcher. The registry holds the immutable catalogue of available
//! actions; the stub executor simulates each action's side effect with a
//! confirmation string instead of a real third-party call.
//!
//! ## Usage
//!
//! ```rust
//! use voxroute_tools::{StubExecutor, ToolRegistry};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(ToolRegistry::builtin());
//! let executor = StubExecutor::new(Arc::clone(&registry));
//! assert_eq!(registry.len(), 5);
//! ```

pub mod catalog;
pub mod registry;
pub mod stub;

pub use catalog::builtin_definitions;
pub use registry::ToolRegistry;
pub use stub::StubExecutor;
