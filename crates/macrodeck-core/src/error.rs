//! Error types for Macrodeck

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid field {field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("owner not found: {0}")]
    OwnerNotFound(String),

    #[error("policy violation: {0}")]
    PolicyViolation(String),

    #[error("interpreter error: {0}")]
    Interpreter(String),

    #[error("authentication failed: {reason}")]
    AuthFailed { reason: String },

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn auth_failed(reason: impl Into<String>) -> Self {
        Self::AuthFailed {
            reason: reason.into(),
        }
    }

    pub fn interpreter(message: impl Into<String>) -> Self {
        Self::Interpreter(message.into())
    }
}
