//! Error types for the SOFIA assistant

use thiserror::Error;

/// Result type alias for SOFIA operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the pure interpreter
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid or unreadable user profile
    #[error("profile error: {0}")]
    Profile(String),

    /// Recognition session misuse (e.g. start while listening)
    #[error("recognition error: {0}")]
    Recognition(String),

    /// Weather provider error
    #[error("weather error: {0}")]
    Weather(String),

    /// Joke provider error
    #[error("joke error: {0}")]
    Joke(String),

    /// Speech output error
    #[error("speech error: {0}")]
    Speech(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// `SQLite` error
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
