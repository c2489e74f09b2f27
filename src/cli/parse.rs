//! CLI parse: clap types for music-cli. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// music-cli - context-aware music selection
#[derive(Parser, Debug)]
#[command(name = "music-cli")]
#[command(about = "Context-aware music selection from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (used when output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Listening context (time of day, season, mood)
    Context {
        #[command(subcommand)]
        command: ContextCommands,
    },
    /// List the mood vocabulary
    Moods {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ContextCommands {
    /// Show the current listening context
    Show {
        /// Describe this local time instead of now (RFC 3339 or "YYYY-MM-DD HH:MM")
        #[arg(long)]
        at: Option<String>,
        /// Mood to attach (name or alias)
        #[arg(long)]
        mood: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
