use std::path::{Path, PathBuf};

/// Fixed location of the customer record document, relative to the working directory
pub const CUSTOMER_RECORD_PATH: &str = "data/customer.json";

/// The record document shipped at the workspace root, addressed from this crate's sources.
/// Lets tests read it regardless of the directory they run in.
pub const SHIPPED_RECORD_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data/customer.json");

pub struct CustomerRepositoryImpl {
    pub path: PathBuf,
}

impl CustomerRepositoryImpl {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for CustomerRepositoryImpl {
    fn default() -> Self {
        Self::new(CUSTOMER_RECORD_PATH)
    }
}
