//! Mapping of front-end failures to HTTP responses.
//!
//! Every failure on `POST /webhook` is a 500 with `{"detail": "<message>"}`;
//! the downstream status code only ever appears inside a successful envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::webhook::ForwardError;

/// Errors surfaced by the HTTP front-end.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    #[error(transparent)]
    Forward(#[from] ForwardError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
