pub mod file_repositories;
pub mod repository;
pub mod utils;

pub use file_repositories::FileRepositories;
pub use repository::customer_repository::{
    CustomerRepositoryImpl, CUSTOMER_RECORD_PATH, SHIPPED_RECORD_PATH,
};

#[cfg(test)]
pub mod test_helper;
