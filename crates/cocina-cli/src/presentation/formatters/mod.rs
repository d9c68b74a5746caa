pub mod csv;
pub mod text;

pub use text::{Paint, fit, join_tags, single_line, truncate};
