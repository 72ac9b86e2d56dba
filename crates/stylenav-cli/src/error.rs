//! Error handling for the stylenav CLI.
//!
//! `CliError` wraps the library and settings errors via `#[from]`, so
//! commands propagate with `?` and `main` converts once through
//! [`cli_error_to_miette`].

mod miette;

pub use self::miette::cli_error_to_miette;

use std::path::PathBuf;

use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] stylenav_config::ConfigError),

    /// The import could not be extracted or had no directory
    #[error(transparent)]
    Navigate(#[from] stylenav::NavigateError),

    /// No stylesheet matched the specifier
    #[error(transparent)]
    Unresolved(#[from] stylenav::Unresolved),

    /// Reading a source file failed
    #[error("Failed to read source file: {0}")]
    Runtime(#[from] stylenav::RuntimeError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from the process environment
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
