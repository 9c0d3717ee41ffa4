pub mod view_kind;
pub mod personal_view;
pub mod bank_view;
pub mod qualification_view;
pub mod merged_view;
pub mod bank_patch;

pub use view_kind::*;
pub use personal_view::*;
pub use bank_view::*;
pub use qualification_view::*;
pub use merged_view::*;
pub use bank_patch::*;
