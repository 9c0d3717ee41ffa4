pub mod repo_impl;
pub mod load;

pub use repo_impl::{CustomerRepositoryImpl, CUSTOMER_RECORD_PATH, SHIPPED_RECORD_PATH};
