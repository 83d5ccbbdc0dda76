//! Rendering of diff reports for display and serialization.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::{to_text, to_text_side_by_side};
