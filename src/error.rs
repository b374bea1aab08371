// src/error.rs

//! Unified error handling for the article browser.

use thiserror::Error;

/// Result type alias for article browser operations.
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

    /// Identifier matches neither the composite nor the legacy shape
    #[error("Invalid article ID format: {0}")]
    InvalidId(String),

    /// Category code is not exactly four digits
    #[error("Invalid category code: {0}")]
    InvalidCategory(String),

    /// No document backs the requested identifier
    #[error("Article not found: {0}")]
    NotFound(String),

    /// The discovery scan failed as a whole
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a discovery error.
    pub fn discovery(message: impl Into<String>) -> Self {
        Self::Discovery(message.into())
    }

    /// Whether a caller should present this error as "article not found".
    ///
    /// Malformed identifiers end up on the same screen as missing documents.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidId(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_invalid_id_render_as_not_found() {
        assert!(AppError::NotFound("0014_999".into()).is_not_found());
        assert!(AppError::InvalidId("xyz".into()).is_not_found());
        assert!(!AppError::discovery("boom").is_not_found());
    }

    #[test]
    fn messages_name_the_identifier() {
        let err = AppError::InvalidId("xyz".into());
        assert_eq!(err.to_string(), "Invalid article ID format: xyz");
        let err = AppError::NotFound("0014_999".into());
        assert_eq!(err.to_string(), "Article not found: 0014_999");
    }
}
