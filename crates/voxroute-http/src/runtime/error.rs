//! Error-to-status mapping for the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use voxroute_core::DispatchError;

use super::speech::SpeechError;

/// Errors a handler can surface to the wire.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Speech(#[from] SpeechError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Dispatch(DispatchError::InvalidRequest { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Dispatch(DispatchError::ToolNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Speech(SpeechError::Transcription(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Speech(SpeechError::Synthesis(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_400() {
        let err = ApiError::from(DispatchError::invalid_request("userInput is required"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn transcription_failure_maps_to_422() {
        let err = ApiError::from(SpeechError::Transcription("bad audio".into()));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
