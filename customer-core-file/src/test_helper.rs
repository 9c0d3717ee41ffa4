//! Test helper module for file-backed repository tests
//!
//! Each test context owns a temporary directory holding the record source, so
//! tests can write, corrupt or omit the document without touching the fixed
//! data file.

use crate::file_repositories::{CustomerRepositories, FileRepositories};
use customer_core_db::models::customer::CustomerModel;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test context that provides repositories over a temporary record source
///
/// The directory is removed when the context is dropped.
pub struct TestContext {
    pub customer_repos: CustomerRepositories,
    source_path: PathBuf,
    _dir: TempDir,
}

impl TestContext {
    /// Get the customer repository from the context
    pub fn customer_repository(&self) -> &crate::CustomerRepositoryImpl {
        &self.customer_repos.customer_repository
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Serialize `customer` into the context's record source
    pub fn write_customer(&self, customer: &CustomerModel) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let bytes = serde_json::to_vec_pretty(customer)?;
        write_source(&self.source_path, &bytes)
    }
}

/// Setup a test context whose record source does not exist yet
pub fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let dir = tempfile::tempdir()?;
    let source_path = dir.path().join("customer.json");

    let repos = FileRepositories::new(source_path.clone());
    let customer_repos = repos.create_customer_repositories();

    Ok(TestContext {
        customer_repos,
        source_path,
        _dir: dir,
    })
}

pub fn write_source(path: &Path, bytes: &[u8]) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    std::fs::write(path, bytes)?;
    Ok(())
}
