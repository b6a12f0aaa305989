//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use confview_settings::{ColorMode, LogLevel};

/// Confview - Inspect the effective configuration
#[derive(Parser, Debug)]
#[command(name = "confview")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (also overrides the `verbose` setting)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file to load
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the log level setting
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Override the color mode setting
    #[arg(long, global = true, value_name = "MODE")]
    pub color: Option<ColorMode>,

    /// Override the worker count setting
    #[arg(long, global = true, value_name = "N")]
    pub jobs: Option<i64>,

    /// Override the timeout setting, in seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print the effective configuration
    ///
    /// Resolves built-in defaults, config files, and command-line
    /// overrides, then renders one `name = value` line per visible
    /// setting.
    ///
    /// Examples:
    ///   confview show                     # Effective config to stdout
    ///   confview show --output conf.txt   # Write to a file
    ///   confview --jobs 8 show            # With an override
    Show {
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print the built-in defaults, ignoring config files and overrides
    Defaults,
}
