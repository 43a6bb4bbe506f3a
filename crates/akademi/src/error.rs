//! Error types for akademi.
//!
//! This module defines all error types used throughout the akademi crate.
//! The HTTP layer maps each variant to a status code in [`crate::api::error`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for akademi operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to read a data file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a data file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A data file exists but does not contain the expected JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Request Errors ===
    /// No record with the given id exists.
    #[error("{label} not found")]
    NotFound {
        /// Human readable resource label, e.g. `Training`.
        label: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// The request did not carry an id where one is required.
    #[error("{0}")]
    MissingId(&'static str),

    /// The request body is malformed or incomplete.
    #[error("{0}")]
    InvalidInput(String),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for akademi operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for the given resource label and id.
    #[must_use]
    pub fn not_found(label: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            label,
            id: id.into(),
        }
    }

    /// Create a new invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error means the addressed record does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was caused by the caller rather than the server.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::MissingId(_) | Self::InvalidInput(_)
        )
    }
}
