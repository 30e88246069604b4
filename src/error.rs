//! Error types for envsync operations.
//!
//! This module defines [`EnvsyncError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing external tool is not an error. Probes return a
//!   [`ProbeOutput`](crate::shell::ProbeOutput) value instead.
//! - A missing manifest is not an error either; it yields an empty requirement set.
//! - A manifest that exists but cannot be parsed fails the scan with
//!   [`EnvsyncError::ManifestParseError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envsync operations.
#[derive(Debug, Error)]
pub enum EnvsyncError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A manifest file exists but its contents are malformed.
    #[error("Failed to parse manifest {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EnvsyncError {
    /// Build a manifest parse error for the given file.
    pub fn manifest(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::ManifestParseError {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for envsync operations.
pub type Result<T> = std::result::Result<T, EnvsyncError>;
