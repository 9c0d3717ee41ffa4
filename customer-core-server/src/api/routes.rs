//! Route configuration for the customer API.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /getDetails/person/{personId}/request/{requestType} | `get_customer_details` |
//! | PATCH | /updateDetails/bank | `patch_bank_details` |
//! | GET | /health | `health_check` |

use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Serialize;

use crate::api::handlers::{get_customer_details, patch_bank_details};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/getDetails/person/{person_id}/request/{request_type}",
            get(get_customer_details),
        )
        .route("/updateDetails/bank", patch(patch_bank_details))
        .route("/health", get(health_check))
        .with_state(state)
}
