//! Core-error to HTTP response mapping.
//!
//! Decoding and validation problems are the caller's fault (400),
//! unknown deal ids are 404, and a signing failure is a process
//! misconfiguration (500). Bodies always carry `result: null`, a
//! human-readable `error` and the stable machine code.

use adapter_core::AdapterError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Boundary wrapper turning an [`AdapterError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AdapterError);

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0 {
            AdapterError::Decoding { .. } | AdapterError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            AdapterError::DealNotFound { .. } => StatusCode::NOT_FOUND,
            AdapterError::Signing { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AdapterError> for ApiError {
    fn from(err: AdapterError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "result": null,
            "error": self.0.to_string(),
            "code": self.0.code(),
        }));
        (self.status(), body).into_response()
    }
}
