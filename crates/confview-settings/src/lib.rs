//! Configuration schema and loading for Confview
//!
//! This crate is the collaborator feeding the rendering core: it
//! defines the typed [`Settings`] schema with its built-in defaults,
//! parses TOML config files into [`Manifest`]s, and resolves the
//! layered effective settings via [`ConfigLoader`].
//!
//! # Layers
//!
//! Configuration is resolved from these layers, later overriding
//! earlier:
//!
//! 1. Built-in defaults
//! 2. User config: `<config dir>/confview/config.toml` (or `--config`)
//! 3. Local overrides: `config.local.toml` next to the user config
//!
//! # Example
//!
//! ```no_run
//! use confview_core::render;
//! use confview_settings::ConfigLoader;
//!
//! let settings = ConfigLoader::new().load()?;
//! let mut out = Vec::new();
//! render(&settings.record(), &mut out)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod loader;
pub mod manifest;
pub mod settings;

pub use error::{Error, Result};
pub use loader::ConfigLoader;
pub use manifest::{Manifest, RetrySection, ScanSection};
pub use settings::{Backoff, Bindings, ColorMode, LogLevel, RetryPolicy, ScanFlags, Settings};
