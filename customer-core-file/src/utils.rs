use customer_core_db::StoreError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// A trait for converting a raw source document into a model.
pub trait TryFromDocument: Sized {
    /// Performs the conversion. `path` is only used to describe failures.
    fn try_from_document(bytes: &[u8], path: &Path) -> Result<Self, StoreError>;
}

impl<T: DeserializeOwned> TryFromDocument for T {
    fn try_from_document(bytes: &[u8], path: &Path) -> Result<Self, StoreError> {
        serde_json::from_slice(bytes).map_err(|source| StoreError::Malformed {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Reads the whole source document, classifying any IO failure as `NotFound`.
pub async fn read_document(path: &Path) -> Result<Vec<u8>, StoreError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| StoreError::NotFound {
            path: path.display().to_string(),
            source,
        })
}
