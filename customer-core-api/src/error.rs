use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Field path -> failure message
    #[error("Validation error: {0:?}")]
    ValidationError(BTreeMap<String, String>),

    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("Invalid view kind: {0}")]
    InvalidViewKind(String),

    #[error("Record source not found: {0}")]
    NotFoundSource(String),

    #[error("Record source malformed: {0}")]
    MalformedSource(String),
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(field.into(), message.into());
        ApiError::ValidationError(fields)
    }

    /// True when the caller supplied bad input, false for failures of the record source.
    pub fn is_client_error(&self) -> bool {
        match self {
            ApiError::ValidationError(_)
            | ApiError::InvalidIdentity(_)
            | ApiError::InvalidViewKind(_) => true,
            ApiError::NotFoundSource(_) | ApiError::MalformedSource(_) => false,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
