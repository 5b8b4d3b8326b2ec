//! Error types for the admin panel
//!
//! Every variant carries owned, clonable data so errors can travel inside
//! iced messages between background tasks and the update loop.

use thiserror::Error;

/// Errors produced while talking to the backend or preparing uploads
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdminError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be parsed
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A local file could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// The configuration file is unreadable or malformed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Preview generation could not finish
    #[error("preview failed: {0}")]
    Preview(String),
}

impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AdminError::Decode(err.to_string())
        } else {
            AdminError::Transport(err.to_string())
        }
    }
}

impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        AdminError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for AdminError {
    fn from(err: toml::de::Error) -> Self {
        AdminError::Config(err.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AdminError>;
