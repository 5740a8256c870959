//! Core error types for Vantage.

use thiserror::Error;

/// Result type alias using `VantageError`.
pub type VantageResult<T> = std::result::Result<T, VantageError>;

/// Generic boxed error for external error sources.
pub type GenericError = Box<dyn std::error::Error + Send + Sync>;

/// Core error type for Vantage operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VantageError {
    /// Malformed selection payload or request shape.
    #[error("ValidationError: {0}")]
    Validation(String),

    /// A referenced entity (e.g. a persisted view) does not exist.
    #[error("NotFound: {0}")]
    NotFound(String),

    /// A view's collection scope does not match the request's target.
    #[error("ScopeMismatch: {0}")]
    ScopeMismatch(String),

    /// Records from mixed collections handed to a single-scope operation.
    #[error("InconsistentScope: {0}")]
    InconsistentScope(String),

    /// Store-level query failure (e.g. unknown filter field).
    #[error("QueryError: {0}")]
    Query(String),

    /// Failure reported by a scoring collaborator.
    #[error("ScoringError: {0}")]
    Scoring(String),

    /// Internal error (bug in Vantage).
    #[error("InternalError: {0}")]
    Internal(String),

    /// IO error.
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// External error from third-party libraries.
    #[error("ExternalError: {0}")]
    ExternalError(GenericError),
}

impl VantageError {
    /// Create a new `Validation` error.
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new `NotFound` error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new `ScopeMismatch` error.
    pub fn scope_mismatch<S: Into<String>>(msg: S) -> Self {
        Self::ScopeMismatch(msg.into())
    }

    /// Create a new `InconsistentScope` error.
    pub fn inconsistent_scope<S: Into<String>>(msg: S) -> Self {
        Self::InconsistentScope(msg.into())
    }

    /// Create a new `Query` error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        Self::Query(msg.into())
    }

    /// Create a new `Scoring` error.
    pub fn scoring<S: Into<String>>(msg: S) -> Self {
        Self::Scoring(msg.into())
    }

    /// Create a new `Internal` error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

/// Ensure a condition holds, returning the named error variant if not.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return Err($crate::VantageError::Validation($msg.to_string()));
        }
    };
    ($cond:expr, $variant:ident: $($msg:tt)*) => {
        if !$cond {
            return Err($crate::VantageError::$variant(format!($($msg)*)));
        }
    };
}

/// Return early with a `Validation` error.
#[macro_export]
macro_rules! validation_err {
    ($($arg:tt)*) => {
        return Err($crate::VantageError::Validation(format!($($arg)*)))
    };
}

/// Return early with a `Query` error.
#[macro_export]
macro_rules! query_err {
    ($($arg:tt)*) => {
        return Err($crate::VantageError::Query(format!($($arg)*)))
    };
}
