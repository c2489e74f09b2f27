//! CLI presentation: text and json formatters per command family.

mod context;
mod moods;

pub use context::{format_context_json_output, format_context_text_output, ContextReport};
pub use moods::{format_moods_json, format_moods_text};
