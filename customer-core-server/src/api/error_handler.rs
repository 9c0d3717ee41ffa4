//! Maps classified service errors onto HTTP responses.
//!
//! | Error | HTTP Status | Description |
//! |-------|-------------|-------------|
//! | InvalidIdentity | 400 | `invalid person id` |
//! | InvalidViewKind | 400 | `invalid requestType value` |
//! | ValidationError | 400 | `validation failed`, with field details |
//! | NotFoundSource | 500 | `Internal Server Error` |
//! | MalformedSource | 500 | `Internal Server Error` |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use customer_core_api::ApiError;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

pub const FAIL_STATUS: &str = "FAIL";
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub description: String,
    pub status: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(description: impl Into<String>, details: Option<BTreeMap<String, String>>) -> Self {
        Self {
            description: description.into(),
            status: FAIL_STATUS.to_string(),
            timestamp: chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            details,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        let (status, body) = match error {
            ApiError::InvalidIdentity(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("invalid person id", None),
            ),
            ApiError::InvalidViewKind(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("invalid requestType value", None),
            ),
            ApiError::ValidationError(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("validation failed", Some(fields)),
            ),
            internal @ (ApiError::NotFoundSource(_) | ApiError::MalformedSource(_)) => {
                // Source details stay in the log
                warn!(error = %internal, "Responding with internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal Server Error", None),
                )
            }
        };
        Self { status, body }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
