// src/error.rs

//! Unified error handling for the clubwire application.

use thiserror::Error;

/// Result type alias for clubwire operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Feed request failed (unreachable upstream or non-success status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed payload could not be decoded
    #[error("feed parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Store query or statement failed
    #[error("store error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// Store connection could not be checked out
    #[error("store pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    /// Store setup failure (pool creation, schema bootstrap)
    #[error("store error: {0}")]
    Store(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a store setup error.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
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
