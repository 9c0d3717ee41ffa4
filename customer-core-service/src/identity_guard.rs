use customer_core_api::{ApiError, ApiResult};
use customer_core_db::models::identifiable::Identifiable;
use tracing::error;

/// Gate shared by every read and merge: exact match against the record's identity
pub fn check_identity<T: Identifiable>(requested: &str, record: &T) -> ApiResult<()> {
    if requested == record.get_identity() {
        Ok(())
    } else {
        error!(person_id = requested, "Invalid person id");
        Err(ApiError::InvalidIdentity(requested.to_string()))
    }
}
