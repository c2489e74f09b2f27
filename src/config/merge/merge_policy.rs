//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources win: defaults < config file < environment.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};

/// Prefix for environment overrides, e.g. `MUSIC_CLI_CONTEXT__HEMISPHERE=south`.
pub const ENV_PREFIX: &str = "MUSIC_CLI";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("context.hemisphere", "north")?
        .set_default("context.periods.morning", 5)?
        .set_default("context.periods.afternoon", 12)?
        .set_default("context.periods.evening", 17)?
        .set_default("context.periods.night", 21)
}

/// Environment overrides; applied last.
pub fn environment_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}
