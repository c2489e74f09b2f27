//! music-cli Binary
//!
//! Command-line interface for context-aware music selection.

use clap::Parser;
use music_cli::cli::{Cli, RunContext};
use music_cli::config::MusicConfig;
use music_cli::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Load configuration once; logging and the run context both use it
    let loaded = RunContext::load_config_for(&cli.command, cli.config.as_deref());

    // Build logging config from CLI args and config file
    let logging_config = build_logging_config(&cli, loaded.as_ref().ok());

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("music-cli starting");

    let context = match loaded.and_then(|config| RunContext::from_config(config, cli.config.clone()))
    {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", music_cli::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", music_cli::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: Option<&MusicConfig>) -> LoggingConfig {
    let mut config = config.map(|c| c.logging.clone()).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
