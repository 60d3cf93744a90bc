mod find_match;
mod merge;
mod move_end;

pub use find_match::{FindMatch, SnapMatch};
pub use merge::Merge;
pub use move_end::MoveEnd;
