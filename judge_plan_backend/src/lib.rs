pub mod actions;
pub mod views;
pub mod conflicts;

pub use actions::*;
pub use views::*;
pub use conflicts::{detect_conflicts, annotated, ConflictMap};
