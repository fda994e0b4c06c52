//! Core error types for weft.

use thiserror::Error;

/// Result type alias using `WeftError`.
pub type WeftResult<T> = std::result::Result<T, WeftError>;

/// Core error type for hypergraph operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WeftError {
    /// Reference to an identity that was deleted or never existed.
    #[error("UnknownId: {kind} {id} is not registered")]
    UnknownId {
        /// Entity kind, `"node"` or `"edge"`.
        kind: &'static str,
        /// Raw numeric identity.
        id: u64,
    },

    /// Malformed edge definition (duplicate or unknown nodes, bad weight).
    #[error("InvalidEdge: {0}")]
    InvalidEdge(String),

    /// Conversion input violates the matrix shape or entry contract.
    #[error("MalformedMatrix: {0}")]
    MalformedMatrix(String),

    /// Invalid parameter provided to an algorithm.
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),

    /// Configuration could not be parsed or failed validation.
    #[error("ConfigError: {0}")]
    ConfigError(String),

    /// JSON serialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// Internal error (a broken invariant).
    #[error("InternalError: {0}")]
    InternalError(String),
}

impl WeftError {
    /// Create a new `UnknownId` error.
    pub fn unknown_id(kind: &'static str, id: u64) -> Self {
        Self::UnknownId { kind, id }
    }

    /// Create a new `InvalidEdge` error.
    pub fn invalid_edge<S: Into<String>>(msg: S) -> Self {
        Self::InvalidEdge(msg.into())
    }

    /// Create a new `MalformedMatrix` error.
    pub fn malformed_matrix<S: Into<String>>(msg: S) -> Self {
        Self::MalformedMatrix(msg.into())
    }

    /// Create a new `InvalidParameter` error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a new `ConfigError`.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a new `InternalError`.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }

    /// Whether this error refers to a missing identity.
    pub fn is_unknown_id(&self) -> bool {
        matches!(self, Self::UnknownId { .. })
    }
}

/// Ensure a condition holds, returning an `InternalError` if not.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident: $($msg:tt)*) => {
        if !$cond {
            return Err($crate::WeftError::$variant(format!($($msg)*)));
        }
    };
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return Err($crate::WeftError::InternalError($msg.to_string()));
        }
    };
}

/// Return early with an `InvalidEdge` error.
#[macro_export]
macro_rules! invalid_edge {
    ($($arg:tt)*) => {
        return Err($crate::WeftError::InvalidEdge(format!($($arg)*)))
    };
}

/// Return early with a `MalformedMatrix` error.
#[macro_export]
macro_rules! malformed_matrix {
    ($($arg:tt)*) => {
        return Err($crate::WeftError::MalformedMatrix(format!($($arg)*)))
    };
}
