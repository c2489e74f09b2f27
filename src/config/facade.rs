//! Config facade: single entry point for loading `MusicConfig`.

use super::merge::merge_policy::{builder_with_defaults, environment_source};
use super::sources::global_file;
use super::MusicConfig;
use config::{ConfigError, File, FileFormat};
use std::path::Path;

/// Loads configuration from the layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the per-user config file, then environment overrides.
    pub fn load() -> Result<MusicConfig, ConfigError> {
        let builder = global_file::add_to_builder(builder_with_defaults()?);
        builder
            .add_source(environment_source())
            .build()?
            .try_deserialize()
    }

    /// Defaults, then `path` (which must exist), then environment overrides.
    pub fn load_from_file(path: &Path) -> Result<MusicConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(environment_source())
            .build()?
            .try_deserialize()
    }
}
