use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }

    pub fn internal() -> Response {
        Self::new(INTERNAL_ERROR_MESSAGE).with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
