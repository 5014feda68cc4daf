//! HTTP router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{health_check, list_tools, process_command, process_voice};
use super::{HttpRuntime, HttpRuntimeConfig};

impl HttpRuntime {
    /// Create the Axum router with default configuration.
    pub fn router(self) -> Router {
        self.router_with_config(HttpRuntimeConfig::default())
    }

    /// Create the Axum router with custom configuration.
    pub fn router_with_config(self, config: HttpRuntimeConfig) -> Router {
        let mut router = Router::new()
            .route("/command", post(process_command))
            .route("/voice", post(process_voice))
            .route("/tools", get(list_tools))
            .route("/health", get(health_check))
            .with_state(self)
            .layer(TraceLayer::new_for_http());

        if config.enable_cors {
            router = router.layer(CorsLayer::permissive());
        }

        router
    }
}
