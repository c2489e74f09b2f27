//! CLI route: single route table and run context. Dispatches to context
//! construction, config handling and presentation.

use crate::cli::parse::{Commands, ConfigCommands, ContextCommands};
use crate::cli::presentation::{
    format_context_json_output, format_context_text_output, format_moods_json,
    format_moods_text, ContextReport,
};
use crate::config::{global_config_path, ConfigLoader, MusicConfig};
use crate::context::mood::Mood;
use crate::context::temporal::parse_timestamp;
use crate::context::{self, MoodContext, TemporalContext};
use crate::error::ApiError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime context for CLI execution: effective config and where it came from.
pub struct RunContext {
    config: MusicConfig,
    config_path: Option<PathBuf>,
}

impl RunContext {
    /// Load and validate configuration, and check the context export surface.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = Self::load_config(config_path.as_deref())?;
        Self::from_config(config, config_path)
    }

    /// Load configuration from `config_path`, or from the layered defaults when absent.
    pub fn load_config(config_path: Option<&Path>) -> Result<MusicConfig, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(config)
    }

    /// Configuration a command runs with.
    ///
    /// `config init` must work when the target file is missing or invalid, so it
    /// never reads it and runs with defaults.
    pub fn load_config_for(
        command: &Commands,
        config_path: Option<&Path>,
    ) -> Result<MusicConfig, ApiError> {
        match command {
            Commands::Config {
                command: ConfigCommands::Init { .. },
            } => Ok(MusicConfig::default()),
            _ => Self::load_config(config_path),
        }
    }

    /// Build from an already-loaded configuration.
    pub fn from_config(config: MusicConfig, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        context::verify_exports(&context::EXPORTS)?;
        debug!(exports = ?context::EXPORTS, "Context surface verified");

        Ok(Self {
            config,
            config_path,
        })
    }

    pub fn config(&self) -> &MusicConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Context {
                command: ContextCommands::Show { at, mood, format },
            } => self.handle_context_show(at.as_deref(), mood.as_deref(), format),
            Commands::Moods { format } => match format.as_str() {
                "json" => format_moods_json(Mood::all()),
                _ => Ok(format_moods_text(Mood::all())),
            },
            Commands::Config { command } => match command {
                ConfigCommands::Show => Ok(toml::to_string_pretty(&self.config)?),
                ConfigCommands::Init { force } => self.handle_config_init(*force),
            },
        }
    }

    /// Build the temporal and mood context for a `context show` request.
    pub fn build_report(
        &self,
        at: Option<&str>,
        mood: Option<&str>,
    ) -> Result<ContextReport, ApiError> {
        let settings = self.config.context.temporal_settings();
        let temporal = match at {
            Some(input) => TemporalContext::at(parse_timestamp(input)?, &settings),
            None => TemporalContext::now(&settings),
        };

        let mood = match mood.or(self.config.context.default_mood.as_deref()) {
            Some(input) => Some(MoodContext::parse(input)?),
            None => None,
        };

        debug!(
            time_of_day = %temporal.time_of_day(),
            season = %temporal.season(),
            mood = ?mood.as_ref().map(|m| m.mood()),
            "Built listening context"
        );
        Ok(ContextReport::new(temporal, mood))
    }

    fn handle_context_show(
        &self,
        at: Option<&str>,
        mood: Option<&str>,
        format: &str,
    ) -> Result<String, ApiError> {
        let report = self.build_report(at, mood)?;
        match format {
            "json" => format_context_json_output(&report),
            _ => Ok(format_context_text_output(
                &report,
                self.config.logging.color,
            )),
        }
    }

    fn handle_config_init(&self, force: bool) -> Result<String, ApiError> {
        let path = match self.config_path {
            Some(ref path) => path.clone(),
            None => global_config_path().ok_or_else(|| {
                ApiError::ConfigError("Could not determine the user config directory".to_string())
            })?,
        };

        if path.exists() && !force {
            return Err(ApiError::ConfigError(format!(
                "Config file already exists at {} (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(&MusicConfig::default())?)?;
        info!(config_path = %path.display(), "Wrote default configuration");

        Ok(format!("Wrote default configuration to {}", path.display()))
    }
}
