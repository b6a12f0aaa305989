//! Error types for confview-settings

use std::path::PathBuf;

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or parsing configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An explicitly requested configuration file does not exist
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// A setting was given a value outside its closed set of tags
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
