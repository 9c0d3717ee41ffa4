//! Transformation layer over the customer record.
//!
//! Every operation loads the record through an injected [`Load`] repository,
//! passes the identity guard, then projects or merges.
//!
//! [`Load`]: customer_core_db::repository::load::Load

pub mod identity_guard;
pub mod merge;
pub mod projection;
pub mod service_impl;

pub use identity_guard::check_identity;
pub use merge::merge;
pub use projection::{project_bank, project_personal, project_qualifications};
pub use service_impl::CustomerServiceImpl;
