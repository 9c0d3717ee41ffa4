use async_trait::async_trait;
use customer_core_db::models::customer::CustomerModel;
use customer_core_db::repository::load::Load;
use customer_core_db::StoreError;
use tracing::debug;

use crate::utils::{read_document, TryFromDocument};

use super::repo_impl::CustomerRepositoryImpl;

impl CustomerRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &CustomerRepositoryImpl,
    ) -> Result<CustomerModel, StoreError> {
        let bytes = read_document(repo.path()).await?;
        debug!(path = %repo.path().display(), size = bytes.len(), "read customer record");

        CustomerModel::try_from_document(&bytes, repo.path())
    }
}

#[async_trait]
impl Load<CustomerModel> for CustomerRepositoryImpl {
    async fn load(&self) -> Result<CustomerModel, StoreError> {
        Self::load_impl(self).await
    }
}
