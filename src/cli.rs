//! CLI domain: parse, route, output, and presentation only.
//! Single route table dispatches to context construction and config handling.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands, ContextCommands};
pub use presentation::{
    format_context_json_output, format_context_text_output, format_moods_json,
    format_moods_text, ContextReport,
};
pub use route::RunContext;
