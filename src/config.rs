//! Configuration for the script runner.
//!
//! Handles:
//! - Command-line argument parsing
//! - Output format selection

use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::render::OutputFormat;

/// Command-line arguments for the script runner
#[derive(Debug, Parser)]
#[command(name = "armscript")]
#[command(about = "Interpreter for arm-robot instruction scripts")]
#[command(version)]
pub struct Args {
    /// Script file to execute
    pub script: PathBuf,

    /// Output format for the diagnostic log
    #[arg(long, default_value = "plain", help = "Output format (plain, ansi, html)")]
    pub format: String,

    /// Print the token table for the script before executing it
    #[arg(long, help = "Print the token table before executing")]
    pub tokens: bool,

    /// Log level for the runner
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub script: PathBuf,
    pub format: OutputFormat,
    pub show_tokens: bool,
    pub log_level: String,
}

impl Config {
    /// Create configuration from the process command line
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let format = OutputFormat::from_name(&args.format)
            .ok_or_else(|| anyhow!("unknown output format '{}'", args.format))?;

        Ok(Config {
            script: args.script,
            format,
            show_tokens: args.tokens,
            log_level: args.log_level,
        })
    }
}
