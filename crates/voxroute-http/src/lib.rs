//! # Voxroute HTTP Runtime
//!
//! Thin HTTP surface over the dispatch pipeline using Axum:
//!
//! - `POST /command` — dispatch a text utterance
//! - `POST /voice` — audio round-trip over the speech boundary
//! - `GET /tools` — full or filtered tool catalogue
//! - `GET /health` — liveness probe
//!
//! The runtime owns no decision logic; it validates the wire shape, calls
//! the dispatcher, and maps errors to status codes.

pub mod runtime;

pub use runtime::{HttpRuntime, HttpRuntimeConfig};
pub use runtime::speech::{PassthroughSpeech, SpeechError, SpeechSynthesizer, SpeechTranscriber};
