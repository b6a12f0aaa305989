//! Layered configuration loading.
//!
//! Settings are resolved from layers, later layers overriding earlier
//! ones:
//!
//! 1. Built-in defaults ([`Settings::default`])
//! 2. User config file: an explicit path, or
//!    `<config dir>/confview/config.toml`
//! 3. Local overrides: `config.local.toml` next to the user config
//!
//! Missing layers are skipped silently; an explicitly requested file
//! that does not exist is an error, and so is invalid TOML anywhere.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::settings::Settings;

/// Name of the local override file, resolved next to the user config.
const LOCAL_CONFIG_FILE: &str = "config.local.toml";

/// Resolves the effective settings from the configured layers.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Explicit config file path (`--config`). When set, the file must
    /// exist.
    explicit_path: Option<PathBuf>,

    /// Override for the config directory (used for testing). When
    /// `None`, the platform directory via `dirs::config_dir()` is used.
    config_dir_override: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader using the platform config directory:
    /// - Linux: `~/.config/confview/`
    /// - macOS: `~/Library/Application Support/confview/`
    /// - Windows: `%APPDATA%\confview\`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader for an explicit config file path.
    ///
    /// The file must exist; a missing explicit path is an error rather
    /// than a silent skip.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit_path: Some(path.into()),
            config_dir_override: None,
        }
    }

    /// Create a loader with a custom config directory.
    ///
    /// Primarily useful for testing, where the real user config must
    /// not leak into assertions.
    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            explicit_path: None,
            config_dir_override: Some(dir.into()),
        }
    }

    /// The user config path this loader will read, if one can be
    /// determined.
    pub fn config_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.explicit_path {
            return Some(path.clone());
        }
        self.config_dir().map(|dir| dir.join("config.toml"))
    }

    fn config_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.config_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|dir| dir.join("confview"))
    }

    /// Resolve the effective settings.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use confview_settings::ConfigLoader;
    ///
    /// let settings = ConfigLoader::new().load()?;
    /// println!("jobs: {}", settings.jobs);
    /// # Ok::<(), confview_settings::Error>(())
    /// ```
    pub fn load(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        let Some(path) = self.config_path() else {
            tracing::debug!("no config directory available — using defaults");
            return Ok(settings);
        };

        // Layer 2 - user config file
        if path.is_file() {
            tracing::debug!(?path, "loading config file");
            let content = fs::read_to_string(&path)?;
            Manifest::parse(&content)?.apply(&mut settings);
            settings.config_path = Some(path.display().to_string());
        } else if self.explicit_path.is_some() {
            return Err(Error::ConfigNotFound { path });
        } else {
            tracing::debug!(?path, "no config file found — using defaults");
        }

        // Layer 3 - local overrides next to the user config
        let local_path = path.with_file_name(LOCAL_CONFIG_FILE);
        if local_path.is_file() {
            tracing::debug!(?local_path, "applying local overrides");
            let content = fs::read_to_string(&local_path)?;
            Manifest::parse(&content)?.apply(&mut settings);
        }

        Ok(settings)
    }
}
