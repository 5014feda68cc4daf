//! # Voxroute Dispatch
//!
//! The intent classification and tool dispatch pipeline: free text in, at
//! most one tool selected by an ordered keyword rule table, one executor
//! call, and a structured response out.

pub mod dispatcher;
pub mod rules;

pub use dispatcher::{DispatchRequest, DispatchResponse, Dispatcher};
pub use rules::{classify, IntentRule, INTENT_RULES};
