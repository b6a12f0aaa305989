//! Confview CLI
//!
//! The command-line interface for inspecting the effective Confview
//! configuration.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use confview_settings::{ConfigLoader, Settings};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match &cli.command {
        Some(Commands::Show { output }) => {
            let settings = load_settings(&cli)?;
            commands::run_show(&settings, output.as_deref())
        }
        Some(Commands::Defaults) => commands::run_defaults(),
        None => {
            // No command provided - show help hint
            println!("{} Configuration inspector", "confview".green().bold());
            println!();
            println!("Run {} for available commands.", "confview --help".cyan());
            Ok(())
        }
    }
}

/// Resolve the effective settings: config layers first, command-line
/// overrides last.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };
    let mut settings = loader.load()?;

    if cli.verbose {
        settings.verbose = true;
    }
    if let Some(level) = cli.log_level {
        settings.log_level = level;
    }
    if let Some(mode) = cli.color {
        settings.color = mode;
    }
    if let Some(jobs) = cli.jobs {
        settings.jobs = jobs;
    }
    if let Some(timeout) = cli.timeout {
        settings.timeout = Some(timeout);
    }

    Ok(settings)
}
