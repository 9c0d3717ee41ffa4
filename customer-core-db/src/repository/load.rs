use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use super::store_error::StoreError;

/// Repository trait for loading the single record a store holds
///
/// Implementations read and parse their source on every call; nothing is cached
/// between calls and the source is never written.
///
/// # Type Parameters
/// * `T` - The record type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Load<CustomerModel> for CustomerRepositoryImpl {
///     async fn load(&self) -> Result<CustomerModel, StoreError> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<T: Identifiable>: Send + Sync {
    /// Load the record from the backing source
    ///
    /// # Returns
    /// * `Ok(T)` - The loaded record
    /// * `Err(StoreError::NotFound)` - The source is missing or unreadable
    /// * `Err(StoreError::Malformed)` - The source does not parse into `T`
    async fn load(&self) -> Result<T, StoreError>;
}
