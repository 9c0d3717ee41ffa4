use customer_core_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record source not found at {path}: {source}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Record source at {path} is malformed: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Store failures surface to callers only as their classified kind
impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { path, .. } => ApiError::NotFoundSource(path),
            StoreError::Malformed { path, source } => {
                ApiError::MalformedSource(format!("{path}: {source}"))
            }
        }
    }
}
