//! Command implementations

use std::fs::File;
use std::io;
use std::path::Path;

use confview_core::render;
use confview_settings::Settings;

use crate::error::Result;

/// Render the effective settings to stdout or to a file.
///
/// Output is written as it renders; on a sink failure mid-stream the
/// partial output stays written.
pub fn run_show(settings: &Settings, output: Option<&Path>) -> Result<()> {
    let record = settings.record();

    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            render(&record, &mut file)?;
        }
        None => {
            let stdout = io::stdout();
            render(&record, &mut stdout.lock())?;
        }
    }

    Ok(())
}

/// Render the built-in defaults, ignoring config files and overrides.
pub fn run_defaults() -> Result<()> {
    let stdout = io::stdout();
    render(&Settings::default().record(), &mut stdout.lock())?;
    Ok(())
}
