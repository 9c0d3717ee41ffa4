pub mod identifiable;
pub mod customer;

// Re-exports
pub use identifiable::*;
pub use customer::*;
