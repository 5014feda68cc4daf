//! HTTP handlers for the dispatch, catalogue, voice, and health endpoints.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json},
};
use chrono::{SecondsFormat, Utc};
use voxroute_dispatch::{DispatchRequest, DispatchResponse};

use super::HttpRuntime;
use super::api_types::{CommandRequest, HealthResponse, ToolListQuery, ToolListResponse};
use super::error::ApiError;

/// POST /command — dispatch a text utterance.
pub async fn process_command(
    State(runtime): State<HttpRuntime>,
    Json(request): Json<CommandRequest>,
) -> Result<Json<DispatchResponse>, ApiError> {
    let response = runtime
        .dispatcher
        .process(DispatchRequest::from(request))
        .await?;
    Ok(Json(response))
}

/// GET /tools — the full catalogue, or the subset named by the
/// comma-separated `tools` query parameter, in registry order.
pub async fn list_tools(
    State(runtime): State<HttpRuntime>,
    Query(query): Query<ToolListQuery>,
) -> Json<ToolListResponse> {
    let tools = match query.tools {
        Some(filter) => {
            let allowed: Vec<String> = filter
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect();
            runtime
                .registry
                .candidates(&allowed)
                .into_iter()
                .cloned()
                .collect()
        }
        None => runtime.registry.list(),
    };

    Json(ToolListResponse { tools })
}

/// POST /voice — audio in, transcribe, dispatch, synthesize, audio out.
///
/// The dispatched text response is what gets synthesized; the structured
/// dispatch fields are not carried on the audio path.
pub async fn process_voice(
    State(runtime): State<HttpRuntime>,
    audio: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let user_input = runtime.transcriber.transcribe(&audio).await?;
    let response = runtime
        .dispatcher
        .process(DispatchRequest::new(&user_input))
        .await?;
    let audio_out = runtime.synthesizer.synthesize(&response.response).await?;

    tracing::debug!(
        bytes_in = audio.len(),
        bytes_out = audio_out.len(),
        tools = ?response.tools_used,
        "voice round-trip complete"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/octet-stream")],
        audio_out,
    ))
}

/// GET /health — trivial liveness probe.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
