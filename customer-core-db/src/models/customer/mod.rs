pub mod bank;
#[allow(clippy::module_inception)]
pub mod customer;
pub mod education;

pub use bank::*;
pub use customer::*;
pub use education::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
