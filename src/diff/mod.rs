//! Line-level change detection between two extracted texts.

mod change;
mod line_diff;

pub use change::{Change, ChangeKind, DiffReport, Summary};
pub use line_diff::diff_lines;
