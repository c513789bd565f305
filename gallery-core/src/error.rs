//! Error types for Gallery Core

use thiserror::Error;

/// Result type alias using GalleryError
pub type Result<T> = std::result::Result<T, GalleryError>;

/// Top-level error type for gallery operations that reach a front end
///
/// Retrieval failures are absorbed by the loaders; only input errors
/// surface here.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("No slug specified")]
    MissingSlug,

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Errors raised by an asset source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed JSON in {path}: {message}")]
    Json { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        SourceError::Transport(e.to_string())
    }
}
