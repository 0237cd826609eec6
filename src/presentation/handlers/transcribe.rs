use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::application::services::TranscriptionError;
use crate::domain::megabytes;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::handlers::error_response::INTERNAL_ERROR_MESSAGE;
use crate::presentation::state::AppState;

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

/// `POST /transcribe` with `{"file": "<name>.ogg"}`.
///
/// The body is taken as loose JSON so that a missing, non-string or
/// unparsable `file` all produce the same 400 response.
#[tracing::instrument(skip_all)]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Rejected transcription request body");
            Value::Null
        }
    };
    let candidate = body.get("file").and_then(Value::as_str);

    tracing::info!(file = ?candidate, "Transcription requested");

    let service = &state.transcription_service;
    match service.transcribe(candidate).await {
        Ok(text) => (StatusCode::OK, Json(TranscribeResponse { text })).into_response(),
        Err(e) => {
            if e.is_client_error() {
                tracing::warn!(error = %e, "Transcription request rejected");
            } else {
                tracing::error!(error = %e, "Transcription failed");
            }
            let (status, message) = error_status(&e, service.validator().source_extension());
            ErrorResponse::new(message).with_status(status)
        }
    }
}

/// Status code and client-facing message for each failure. Server-side failures
/// get fixed messages; their details stay in the log.
fn error_status(error: &TranscriptionError, source_extension: &str) -> (StatusCode, String) {
    match error {
        TranscriptionError::MissingParameter => (
            StatusCode::BAD_REQUEST,
            r#"Missing or invalid "file" parameter"#.to_string(),
        ),
        TranscriptionError::UnsupportedExtension { .. } => (
            StatusCode::BAD_REQUEST,
            format!(r#""file" must be an .{source_extension} file"#),
        ),
        TranscriptionError::InvalidName { .. } => (
            StatusCode::BAD_REQUEST,
            r#""file" must be a plain file name without directory components"#.to_string(),
        ),
        TranscriptionError::NotFound { file, dir } => (
            StatusCode::NOT_FOUND,
            format!("File {} not found in {}", file, dir.display()),
        ),
        TranscriptionError::TooLarge {
            file,
            actual_bytes,
            max_bytes,
        } => (
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "File {} is too large ({:.2} MB). Max allowed is {:.2} MB.",
                file,
                megabytes(*actual_bytes),
                megabytes(*max_bytes)
            ),
        ),
        TranscriptionError::ResampleFailed(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Audio conversion failed".to_string(),
        ),
        TranscriptionError::TranscribeFailed { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Whisper CLI failed".to_string(),
        ),
        TranscriptionError::Timeout { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Transcription timed out".to_string(),
        ),
        TranscriptionError::ResultMissing { .. } | TranscriptionError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_ERROR_MESSAGE.to_string(),
        ),
    }
}
