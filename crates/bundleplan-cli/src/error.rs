//! Error handling for the bundleplan CLI.
//!
//! `CliError` wraps the library's `ConfigError` and adds the failure modes of
//! the command-line layer. Every variant renders with an actionable message;
//! [`cli_error_to_miette`] turns it into a diagnostic in `main`.

mod diagnostic;

use std::path::PathBuf;

use thiserror::Error;

pub use bundleplan_config::ConfigError;
pub use diagnostic::cli_error_to_miette;

#[derive(Debug, Error)]
pub enum CliError {
    /// Settings loading or plan validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Refusing to clobber a file the user did not ask to replace
    #[error("File already exists: {}\n\nHint: Pass --force to overwrite it", .0.display())]
    AlreadyExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Attach context to fallible results.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into `FileNotFound(path)`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}
