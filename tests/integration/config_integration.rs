//! Integration tests for the configuration system

use clap::Parser;
use music_cli::cli::{Cli, RunContext};
use music_cli::config::{ConfigLoader, MusicConfig};
use music_cli::context::mood::Mood;
use music_cli::context::temporal::{Hemisphere, Season, TimeOfDay};
use music_cli::error::ApiError;
use tempfile::TempDir;

#[test]
fn test_config_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");

    std::fs::write(
        &config_file,
        r#"
[context]
hemisphere = "south"
default_mood = "chill"

[context.periods]
morning = 6
night = 23

[logging]
level = "info"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.context.hemisphere, Hemisphere::South);
    assert_eq!(config.context.default_mood.as_deref(), Some("chill"));
    assert_eq!(config.context.periods.morning, 6);
    assert_eq!(config.context.periods.afternoon, 12);
    assert_eq!(config.context.periods.night, 23);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.output, "stderr");
}

#[test]
fn test_config_drives_context() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_file,
        "[context]\nhemisphere = \"south\"\ndefault_mood = \"study\"\n\n[context.periods]\nnight = 23\n",
    )
    .unwrap();

    let ctx = RunContext::new(Some(config_file)).unwrap();
    let report = ctx.build_report(Some("2024-12-24 22:00"), None).unwrap();
    assert_eq!(report.temporal.time_of_day(), TimeOfDay::Evening);
    assert_eq!(report.temporal.season(), Season::Summer);
    assert_eq!(report.mood.unwrap().mood(), Mood::Focus);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");
    assert!(ConfigLoader::load_from_file(&missing).is_err());
    assert!(matches!(
        RunContext::new(Some(missing)),
        Err(ApiError::ConfigError(_))
    ));
}

#[test]
fn test_invalid_default_mood_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("config.toml");
    std::fs::write(&config_file, "[context]\ndefault_mood = \"grumpy\"\n").unwrap();

    let err = RunContext::new(Some(config_file)).err().unwrap();
    assert!(err.to_string().contains("default_mood"));
}

#[test]
fn test_config_init_writes_defaults_and_refuses_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("nested").join("config.toml");
    let path = config_file.to_string_lossy().to_string();

    let ctx = RunContext::from_config(MusicConfig::default(), Some(config_file.clone())).unwrap();
    let init = Cli::try_parse_from(["music-cli", "--config", path.as_str(), "config", "init"]).unwrap();
    let out = ctx.execute(&init.command).unwrap();
    assert!(out.contains("Wrote default configuration"));

    let written = ConfigLoader::load_from_file(&config_file).unwrap();
    assert_eq!(written, MusicConfig::default());

    assert!(ctx.execute(&init.command).is_err());

    let forced =
        Cli::try_parse_from(["music-cli", "--config", path.as_str(), "config", "init", "--force"])
            .unwrap();
    assert!(ctx.execute(&forced.command).is_ok());
}

#[test]
fn test_config_show_prints_effective_toml() {
    let mut config = MusicConfig::default();
    config.context.hemisphere = Hemisphere::South;
    let ctx = RunContext::from_config(config, None).unwrap();
    let cli = Cli::try_parse_from(["music-cli", "config", "show"]).unwrap();
    let out = ctx.execute(&cli.command).unwrap();
    assert!(out.contains("hemisphere = \"south\""));
}
