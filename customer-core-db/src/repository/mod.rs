pub mod load;
pub mod store_error;

// Re-exports
pub use load::*;
pub use store_error::*;
