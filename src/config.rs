//! Configuration System
//!
//! Layered configuration: merge-policy defaults, then the per-user config file
//! (or an explicit `--config` file), then `MUSIC_CLI_` environment overrides.

use crate::context::mood::Mood;
use crate::context::temporal::{DayPeriods, Hemisphere, TemporalSettings};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicConfig {
    /// Listening context settings
    #[serde(default)]
    pub context: ContextConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings that shape temporal and mood context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Hemisphere used to derive the season
    #[serde(default)]
    pub hemisphere: Hemisphere,

    /// Mood used by `context show` when `--mood` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mood: Option<String>,

    /// Start hours of morning, afternoon, evening and night
    #[serde(default)]
    pub periods: DayPeriods,
}

impl ContextConfig {
    pub fn temporal_settings(&self) -> TemporalSettings {
        TemporalSettings {
            periods: self.periods,
            hemisphere: self.hemisphere,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Context(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Context(msg) => write!(f, "Context: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl MusicConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.context.periods.validate() {
            errors.push(ValidationError::Context(e.to_string()));
        }

        if let Some(ref mood) = self.context.default_mood {
            if let Err(e) = mood.parse::<Mood>() {
                errors.push(ValidationError::Context(format!("default_mood: {}", e)));
            }
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            errors.push(ValidationError::Logging(format!(
                "format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
