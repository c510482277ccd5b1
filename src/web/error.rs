use crate::error::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// Error shape returned by every API endpoint: `{error, details}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    details: String,
}

impl ApiError {
    /// Client error for absent required request parameters
    pub fn bad_request(details: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "Missing required parameters".to_string(),
            details: details.to_string(),
        }
    }

    /// Wrap an internal failure under the endpoint's error string.
    /// Missing-input errors keep their client-error status.
    pub fn from_error(endpoint_error: &str, source: Error) -> Self {
        error!("{}: {:?}", endpoint_error, source);
        let status = match source {
            Error::MissingInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            error: endpoint_error.to_string(),
            details: source.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.error,
            "details": self.details,
        }));
        (self.status, body).into_response()
    }
}
