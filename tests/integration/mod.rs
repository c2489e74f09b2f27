//! Integration tests for music-cli

mod cli_binary;
mod config_integration;
