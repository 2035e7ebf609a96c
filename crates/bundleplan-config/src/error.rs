//! Error types for settings loading and plan validation.
//!
//! Resolving a plan never fails; these errors only come from the layers
//! around it.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Settings loading
    #[error("settings file not found: {}", path.display())]
    SettingsNotFound { path: PathBuf },

    #[error("invalid settings: {message}")]
    InvalidSettings {
        message: String,
        hint: Option<String>,
    },

    #[error("project root could not be made absolute: {}", path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Structural validation (no filesystem checks)
    #[error("plan validation failed: {message}")]
    PlanValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation
    #[error("entry point not found: {}", path.display())]
    EntryNotFound { path: PathBuf },

    #[error("HTML template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },
}

impl ConfigError {
    /// Actionable hint for the user, when one exists.
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidSettings { hint, .. } | ConfigError::PlanValidation { hint, .. } => {
                hint.as_deref()
            }
            ConfigError::SettingsNotFound { .. } => {
                Some("Run 'bundleplan init' or drop the --config flag to use defaults")
            }
            ConfigError::EntryNotFound { .. } => Some("Create src/app.js under the project root"),
            ConfigError::TemplateNotFound { .. } => {
                Some("Create src/html/index.html under the project root")
            }
            _ => None,
        }
    }
}
