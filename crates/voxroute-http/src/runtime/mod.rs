//! HTTP runtime state and configuration.

pub mod api_types;
pub mod error;
pub mod handlers;
pub mod router;
pub mod speech;

use std::sync::Arc;

use voxroute_dispatch::Dispatcher;
use voxroute_tools::{StubExecutor, ToolRegistry};

use speech::{PassthroughSpeech, SpeechSynthesizer, SpeechTranscriber};

/// Router configuration toggles.
#[derive(Debug, Clone)]
pub struct HttpRuntimeConfig {
    /// Attach a permissive CORS layer.
    pub enable_cors: bool,
}

impl Default for HttpRuntimeConfig {
    fn default() -> Self {
        Self { enable_cors: true }
    }
}

/// Shared state for all HTTP handlers.
///
/// Everything inside is immutable or internally synchronized, so the
/// runtime is cheap to clone per request.
#[derive(Clone)]
pub struct HttpRuntime {
    pub(crate) registry: Arc<ToolRegistry>,
    pub(crate) dispatcher: Arc<Dispatcher>,
    pub(crate) transcriber: Arc<dyn SpeechTranscriber>,
    pub(crate) synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl HttpRuntime {
    /// Create a runtime over an explicit registry and dispatcher.
    pub fn new(
        registry: Arc<ToolRegistry>,
        dispatcher: Arc<Dispatcher>,
        transcriber: Arc<dyn SpeechTranscriber>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            registry,
            dispatcher,
            transcriber,
            synthesizer,
        }
    }

    /// Create a runtime over the built-in catalogue, the stub executor, and
    /// the passthrough speech stub.
    pub fn with_builtin_tools() -> Self {
        let registry = Arc::new(ToolRegistry::builtin());
        let executor = Arc::new(StubExecutor::new(Arc::clone(&registry)));
        let dispatcher = Arc::new(Dispatcher::new(Arc::clone(&registry), executor));
        let speech = Arc::new(PassthroughSpeech);
        Self::new(registry, dispatcher, speech.clone(), speech)
    }
}
