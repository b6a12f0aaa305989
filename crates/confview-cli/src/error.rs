//! Error types for confview-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from confview-settings
    #[error(transparent)]
    Settings(#[from] confview_settings::Error),

    /// Standard I/O error, sink write failures included
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
