//! Unified application error types for ImageHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested image or metadata was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (image already exists, etc.).
    Conflict,
    /// The requested operation kind is not part of the supported set.
    UnsupportedOperation,
    /// A configuration error occurred (unknown driver, invalid params).
    Configuration,
    /// A plugin failed during a pre- or post-execution phase.
    Plugin,
    /// An image transformation failed.
    Transformation,
    /// A database driver error occurred.
    Database,
    /// A storage driver error occurred.
    Storage,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Default HTTP status code for this kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Validation => 400,
            Self::Conflict => 409,
            Self::UnsupportedOperation
            | Self::Configuration
            | Self::Plugin
            | Self::Transformation
            | Self::Database
            | Self::Storage
            | Self::Serialization
            | Self::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::UnsupportedOperation => write!(f, "UNSUPPORTED_OPERATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Plugin => write!(f, "PLUGIN"),
            Self::Transformation => write!(f, "TRANSFORMATION"),
            Self::Database => write!(f, "DATABASE"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout ImageHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. Plugin failures keep the plugin's own
/// `AppError` as [`source`](std::error::Error::source) so the original
/// cause and status survive the wrapping.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create the fixed "Invalid operation" error for unsupported kinds.
    pub fn unsupported_operation(requested: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::UnsupportedOperation,
            format!("Invalid operation: {requested}"),
        )
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Wrap a plugin failure, keeping the original error as the cause.
    pub fn plugin(message: impl Into<String>, cause: AppError) -> Self {
        Self::with_source(ErrorKind::Plugin, message, cause)
    }

    /// Create a transformation error.
    pub fn transformation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transformation, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// The wrapped `AppError`, if this error carries one as its source.
    pub fn cause(&self) -> Option<&AppError> {
        self.source
            .as_deref()
            .and_then(|source| source.downcast_ref::<AppError>())
    }

    /// The innermost `AppError` in the cause chain (self if none).
    pub fn root_cause(&self) -> &AppError {
        let mut current = self;
        while let Some(inner) = current.cause() {
            current = inner;
        }
        current
    }

    /// HTTP status code for this error.
    ///
    /// Plugin errors report the status of the failure they wrap.
    pub fn status_code(&self) -> u16 {
        match self.kind {
            ErrorKind::Plugin => self.root_cause().kind.status_code(),
            kind => kind.status_code(),
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
