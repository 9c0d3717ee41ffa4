pub mod bank;
pub mod personal;
pub mod qualifications;

pub use bank::project_bank;
pub use personal::{extract_contacts, project_personal};
pub use qualifications::{project_education, project_qualifications};
