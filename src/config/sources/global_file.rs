//! Per-user config file source: `$XDG_CONFIG_HOME/music-cli/config.toml` on Linux,
//! the platform config directory elsewhere.

use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to the per-user config file.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "music-cli").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the per-user config file to the builder if it exists.
pub fn add_to_builder(mut builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    if let Some(path) = global_config_path() {
        if path.exists() {
            debug!(config_path = %path.display(), "Loading user configuration");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        } else {
            debug!(
                config_path = %path.display(),
                "No user configuration file; run `music-cli config init` to create one"
            );
        }
    }
    builder
}
