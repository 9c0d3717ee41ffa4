//! Customer HTTP handlers.
//!
//! - `GET /getDetails/person/{personId}/request/{requestType}` - read one view
//! - `PATCH /updateDetails/bank` - merge a bank detail patch into the record

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use customer_core_api::{ApiError, CustomerView, MergedView, PatchBankDetailsRequest, ViewKind};
use tracing::{error, info, warn};

use crate::api::error_handler::ApiErrorResponse;
use crate::state::AppState;

/// GET /getDetails/person/{personId}/request/{requestType}
///
/// # Response
///
/// - `200 OK` - the requested view
/// - `400 Bad Request` - unknown person id or request type
/// - `500 Internal Server Error` - the record could not be read
pub async fn get_customer_details(
    State(state): State<AppState>,
    Path((person_id, request_type)): Path<(String, String)>,
) -> Result<Json<CustomerView>, ApiErrorResponse> {
    info!(request_type = %request_type, person_id = %person_id, "Request received");

    let kind = request_type.parse::<ViewKind>().map_err(|e| {
        error!(request_type = %request_type, "requestType is not valid");
        e
    })?;

    let view = state.customer_service().get_details(&person_id, kind).await?;
    Ok(Json(view))
}

/// PATCH /updateDetails/bank
///
/// The body is validated before the record is touched; the merged view is
/// returned and never stored.
///
/// # Response
///
/// - `200 OK` - the merged customer view
/// - `400 Bad Request` - invalid body or unknown person id
/// - `500 Internal Server Error` - the record could not be read
pub async fn patch_bank_details(
    State(state): State<AppState>,
    payload: Result<Json<PatchBankDetailsRequest>, JsonRejection>,
) -> Result<Json<MergedView>, ApiErrorResponse> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected patch body");
        ApiError::validation("body", rejection.body_text())
    })?;

    let patch = request.into_patch().map_err(|e| {
        warn!(error = %e, "Patch validation failed");
        e
    })?;
    info!(person_id = %patch.person_id, "Patch received");

    let merged = state.customer_service().patch_bank_details(patch).await?;
    Ok(Json(merged))
}
