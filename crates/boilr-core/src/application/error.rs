//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Template catalog access failed (lock poisoned, unreadable source).
    #[error("Template catalog error: {reason}")]
    CatalogError { reason: String },

    /// Package installation failed. The scaffold itself is left in place;
    /// callers surface this as a warning, not a failure.
    #[error("Package install failed ({command}): {reason}")]
    InstallFailed { command: String, reason: String },

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CatalogError { .. } => vec![
                "The template catalog could not be read".into(),
                "Check the catalog file referenced by your configuration".into(),
            ],
            Self::InstallFailed { command, .. } => vec![
                format!("Run '{command}' manually inside the project directory"),
                "Check that npm is installed and on your PATH".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {name}"),
                "This is likely a configuration error".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::CatalogError { .. } => ErrorCategory::Internal,
            Self::InstallFailed { .. } => ErrorCategory::Internal,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
        }
    }
}
