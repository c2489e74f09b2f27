//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, ContextError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Context(ContextError::UnknownMood { .. }) => {
            format!("{}\nRun `music-cli moods` to list accepted names.", e)
        }
        _ => e.to_string(),
    }
}
