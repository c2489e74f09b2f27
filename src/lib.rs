//! music-cli: context-aware music selection
//!
//! Command-line tool that describes the listening context (time of day,
//! weekday or weekend, season, declared mood). The stable public surface for
//! that context lives in [`context`].

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
