//! Manifest parsing for config.toml files
//!
//! A manifest is the parsed form of one configuration file. Every key
//! is optional; applying a manifest onto [`Settings`] overrides only
//! the keys the file actually set, so layered files compose with
//! later-wins semantics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::settings::{Backoff, ColorMode, LogLevel, Settings};

/// One configuration file, parsed from TOML.
///
/// # Example
///
/// ```
/// use confview_settings::Manifest;
///
/// let manifest = Manifest::parse(r#"
/// log_level = "debug"
/// jobs = 8
///
/// [scan]
/// hidden = true
///
/// [retry]
/// backoff = "linear"
/// "#).unwrap();
///
/// assert_eq!(manifest.jobs, Some(8));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub verbose: Option<bool>,
    pub color: Option<ColorMode>,
    pub log_level: Option<LogLevel>,
    pub jobs: Option<i64>,
    pub timeout: Option<f64>,
    pub retry_count: Option<i64>,
    pub editor: Option<String>,
    pub cache_dir: Option<String>,

    /// `[scan]` section
    pub scan: ScanSection,

    /// `[retry]` section
    pub retry: RetrySection,

    /// `[bindings]` table of key chord -> action
    pub bindings: BTreeMap<String, String>,
}

/// Optional overrides for the scan flag record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanSection {
    pub symlinks: Option<bool>,
    pub hidden: Option<bool>,
    pub gitignore: Option<bool>,
    pub archives: Option<bool>,
}

/// Optional overrides for the retry policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySection {
    pub limit: Option<i64>,
    pub backoff: Option<Backoff>,
    pub max_delay: Option<f64>,
}

impl Manifest {
    /// Parse a manifest from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content)?;
        Ok(manifest)
    }

    /// Apply this manifest onto existing settings.
    ///
    /// Only keys present in the file override; everything else keeps
    /// its current value.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(v) = self.verbose {
            settings.verbose = v;
        }
        if let Some(v) = self.color {
            settings.color = v;
        }
        if let Some(v) = self.log_level {
            settings.log_level = v;
        }
        if let Some(v) = self.jobs {
            settings.jobs = v;
        }
        if let Some(v) = self.timeout {
            settings.timeout = Some(v);
        }
        if let Some(v) = self.retry_count {
            settings.retry_count = Some(v);
        }
        if let Some(v) = &self.editor {
            settings.editor = Some(v.clone());
        }
        if let Some(v) = &self.cache_dir {
            settings.cache_dir = Some(v.clone());
        }

        if let Some(v) = self.scan.symlinks {
            settings.scan.symlinks = v;
        }
        if let Some(v) = self.scan.hidden {
            settings.scan.hidden = v;
        }
        if let Some(v) = self.scan.gitignore {
            settings.scan.gitignore = v;
        }
        if let Some(v) = self.scan.archives {
            settings.scan.archives = v;
        }

        if let Some(v) = self.retry.limit {
            settings.retry.limit = v;
        }
        if let Some(v) = self.retry.backoff {
            settings.retry.backoff = v;
        }
        if let Some(v) = self.retry.max_delay {
            settings.retry.max_delay = Some(v);
        }

        // per-key override, bindings from earlier layers survive
        for (key, action) in &self.bindings {
            settings.bindings.bind(key.clone(), action.clone());
        }
    }
}
