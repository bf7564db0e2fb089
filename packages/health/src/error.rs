//! Error type shared by the service layer and store implementations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HealthError {
    /// No session, or credentials did not match.
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    /// Input rejected before it reached the store.
    #[error("{0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Store(String),
}

impl HealthError {
    pub fn forbidden(msg: impl Into<String>) -> Self {
        HealthError::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        HealthError::NotFound(msg.into())
    }

    pub fn store(err: impl std::fmt::Display) -> Self {
        HealthError::Store(err.to_string())
    }
}

pub type Result<T, E = HealthError> = std::result::Result<T, E>;
