mod text;

pub use text::{format_flat_text, format_structured_text};
