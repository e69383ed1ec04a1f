//! Error types for the binary

use thiserror::Error;

use crate::config::ConfigError;

/// Result type for application startup and the event loop
pub type AppResult<T> = Result<T, AppError>;

/// Errors that end the application
#[derive(Debug, Error)]
pub enum AppError {
    /// Terminal or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration cannot be rendered
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The log subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Configuration could not be printed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging(message.into())
    }
}
