// src/error.rs

//! Unified error handling for the portal tools.

use std::fmt;

use thiserror::Error;

/// Result type alias for portal operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Login rejected or token missing
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Course data could not be obtained
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A deadline or timestamp string could not be parsed
    #[error("Cannot parse '{value}': {message}")]
    Parse { value: String, message: String },

    /// A persisted document could not be read or decoded
    #[error("Failed to read {key}: {message}")]
    PersistenceRead { key: String, message: String },

    /// A document could not be written
    #[error("Failed to write {key}: {message}")]
    PersistenceWrite { key: String, message: String },

    /// Notification delivery failed
    #[error("Notification failed: {0}")]
    Notify(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a timestamp parse error.
    pub fn parse(value: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Parse {
            value: value.into(),
            message: message.to_string(),
        }
    }

    /// Create a persistence read error for a storage key.
    pub fn read(key: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::PersistenceRead {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Create a persistence write error for a storage key.
    pub fn write(key: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::PersistenceWrite {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Create a fetch error.
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    /// Create a notification error.
    pub fn notify(message: impl Into<String>) -> Self {
        Self::Notify(message.into())
    }

    /// Create an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
