use std::path::PathBuf;
use std::sync::Arc;

use crate::repository::customer_repository::{CustomerRepositoryImpl, CUSTOMER_RECORD_PATH};

pub struct FileRepositories {
    source_path: PathBuf,
}

impl FileRepositories {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
        }
    }

    /// Repositories over the fixed record document shipped with the service
    pub fn at_fixed_location() -> Self {
        Self::new(CUSTOMER_RECORD_PATH)
    }

    /// Create all customer repositories reading the same source
    pub fn create_customer_repositories(&self) -> CustomerRepositories {
        CustomerRepositories {
            customer_repository: Arc::new(CustomerRepositoryImpl::new(self.source_path.clone())),
        }
    }
}

pub struct CustomerRepositories {
    pub customer_repository: Arc<CustomerRepositoryImpl>,
}
